// Host-side tests for the theme, card-interaction and viewport slices.
// The crate itself is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod cards {
    include!("../src/state/cards.rs");
}
mod theme {
    include!("../src/state/theme.rs");
}
mod viewport {
    include!("../src/state/viewport.rs");
}

use cards::CardInteraction;
use theme::Theme;
use viewport::Viewport;

#[test]
fn theme_defaults_to_dark_and_toggling_twice_restores_it() {
    let theme = Theme::default();
    assert_eq!(theme, Theme::Dark);
    assert!(theme.is_dark());

    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(theme.toggle().toggle(), theme);
    assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
}

#[test]
fn theme_classes_differ_per_mode() {
    assert_ne!(Theme::Dark.page_class(), Theme::Light.page_class());
}

#[test]
fn hover_and_press_track_the_named_card() {
    let mut cards = CardInteraction::new();
    assert_eq!(cards.hovered(), None);
    assert_eq!(cards.pressed(), None);

    cards.hover_start("work-halo");
    cards.press_start("work-halo");
    assert_eq!(cards.hovered(), Some("work-halo"));
    assert_eq!(cards.pressed(), Some("work-halo"));

    cards.press_end("work-halo");
    assert_eq!(cards.pressed(), None);
    cards.hover_end("work-halo");
    assert_eq!(cards.hovered(), None);
}

#[test]
fn a_late_end_event_from_another_card_is_ignored() {
    let mut cards = CardInteraction::new();

    // Pointer slides quickly from one card onto the next; the first card's
    // leave event lands after the second card's enter event.
    cards.hover_start("work-verve");
    cards.hover_start("work-halo");
    cards.hover_end("work-verve");
    assert_eq!(cards.hovered(), Some("work-halo"));

    cards.press_start("plan-studio");
    cards.press_end("plan-starter");
    assert_eq!(cards.pressed(), Some("plan-studio"));
}

#[test]
fn hover_and_press_are_independent_slots() {
    let mut cards = CardInteraction::new();
    cards.hover_start("work-atlas");
    cards.press_start("plan-agency");

    cards.hover_end("work-atlas");
    assert_eq!(cards.hovered(), None);
    assert_eq!(cards.pressed(), Some("plan-agency"));
}

#[test]
fn viewport_overwrites_in_place() {
    let mut vp = Viewport::default();
    assert_eq!(vp.scroll_offset, 0.0);

    vp.on_scroll(420.0);
    vp.on_pointer(100.0, 250.0);
    assert_eq!(vp.scroll_offset, 420.0);
    assert_eq!((vp.pointer_x, vp.pointer_y), (100.0, 250.0));

    vp.on_scroll(0.0);
    assert_eq!(vp.scroll_offset, 0.0);
    assert_eq!((vp.pointer_x, vp.pointer_y), (100.0, 250.0));
}
