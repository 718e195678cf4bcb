use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::state::theme::Theme;

/// Section ids in page order, paired with the label shown in the bar.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("testimonials", "Testimonials"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Option<AttrValue>,
    pub theme: Theme,
    /// Owned by the page so that every scroll-to-section path closes it.
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_select: Callback<&'static str>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_theme.emit(());
        })
    };

    let menu_class = if props.menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <span class="nav-logo">{"Social Studioz"}</span>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_ITEMS.iter().copied().map(|(id, label)| {
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_select.emit(id);
                                })
                            };
                            let is_active = props.active.as_deref() == Some(id);
                            html! {
                                <button
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    {onclick}
                                >
                                    {label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <button class="theme-toggle" onclick={toggle_theme}>
                        { if props.theme.is_dark() { "☀️" } else { "🌙" } }
                    </button>
                </div>
            </div>
            <style>
                {r#".top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    backdrop-filter: blur(10px);
                    background: rgba(0, 0, 0, 0.5);
                    transition: background 0.3s ease;
                }
                .theme-light .top-nav {
                    background: rgba(255, 255, 255, 0.5);
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.85);
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.3);
                }
                .theme-light .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    color: inherit;
                    padding: 0.25rem 0;
                    transition: color 0.2s ease, transform 0.2s ease;
                }
                .nav-link:hover {
                    color: #3B82F6;
                    transform: scale(1.1);
                }
                .nav-link.active {
                    color: #3B82F6;
                }
                .theme-toggle {
                    background: rgba(128, 128, 128, 0.2);
                    border: none;
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                    flex-direction: column;
                    gap: 5px;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 0;
                        background: rgba(0, 0, 0, 0.95);
                    }
                    .theme-light .nav-links {
                        background: rgba(255, 255, 255, 0.97);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }"#}
            </style>
        </nav>
    }
}
