// Host-side tests for the contact-form send lifecycle.
// The crate itself is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod submit {
    include!("../src/state/submit.rs");
}

use submit::*;

fn complete_config() -> DeliveryConfig {
    DeliveryConfig {
        service_id: "svc_1".into(),
        template_id: "tpl_1".into(),
        account_id: "acct_1".into(),
    }
}

#[test]
fn successful_attempt_walks_idle_sending_sent() {
    let mut lc = SendLifecycle::new();
    assert_eq!(lc.status(), SendStatus::Idle);

    let ticket = lc.begin().expect("fresh lifecycle accepts a submit");
    assert_eq!(lc.status(), SendStatus::Sending);

    assert!(lc.settle(ticket, true));
    assert_eq!(lc.status(), SendStatus::Sent);
}

#[test]
fn failed_delivery_walks_idle_sending_failed() {
    let mut lc = SendLifecycle::new();
    let ticket = lc.begin().unwrap();

    assert!(lc.settle(ticket, false));
    assert_eq!(lc.status(), SendStatus::Failed(SendFailure::Delivery));
}

#[test]
fn submitting_is_inert_while_an_attempt_is_in_flight() {
    let mut lc = SendLifecycle::new();
    let ticket = lc.begin().unwrap();

    assert!(lc.begin().is_none());
    assert_eq!(lc.status(), SendStatus::Sending);

    // The in-flight attempt still settles normally afterwards.
    assert!(lc.settle(ticket, true));
    assert_eq!(lc.status(), SendStatus::Sent);
}

#[test]
fn sent_and_failed_are_terminal_only_until_the_next_submit() {
    let mut lc = SendLifecycle::new();
    let first = lc.begin().unwrap();
    lc.settle(first, true);
    assert_eq!(lc.status(), SendStatus::Sent);

    let second = lc.begin().expect("resubmit from Sent is allowed");
    assert_eq!(lc.status(), SendStatus::Sending);
    lc.settle(second, false);
    assert_eq!(lc.status(), SendStatus::Failed(SendFailure::Delivery));

    assert!(lc.begin().is_some(), "resubmit from Failed is allowed");
}

#[test]
fn missing_config_fails_without_any_delivery_call() {
    let mut lc = SendLifecycle::new();
    lc.reject(SendFailure::MissingConfig);
    assert_eq!(lc.status(), SendStatus::Failed(SendFailure::MissingConfig));
}

#[test]
fn reject_is_ignored_while_sending() {
    let mut lc = SendLifecycle::new();
    let ticket = lc.begin().unwrap();

    lc.reject(SendFailure::MissingConfig);
    assert_eq!(lc.status(), SendStatus::Sending);
    assert!(lc.settle(ticket, true));
}

#[test]
fn stale_tickets_cannot_overwrite_a_newer_attempt() {
    let mut lc = SendLifecycle::new();

    let first = lc.begin().unwrap();
    assert!(lc.settle(first, false));

    let second = lc.begin().unwrap();
    // The earlier attempt's continuation arrives late: dropped.
    assert!(!lc.settle(first, true));
    assert_eq!(lc.status(), SendStatus::Sending);

    assert!(lc.settle(second, true));
    assert_eq!(lc.status(), SendStatus::Sent);
}

#[test]
fn a_ticket_settles_at_most_once() {
    let mut lc = SendLifecycle::new();
    let ticket = lc.begin().unwrap();
    assert!(lc.settle(ticket, false));
    assert!(!lc.settle(ticket, true));
    assert_eq!(lc.status(), SendStatus::Failed(SendFailure::Delivery));
}

#[test]
fn config_is_complete_only_with_all_three_identifiers() {
    assert!(complete_config().is_complete());

    for blank in 0..3 {
        let mut config = complete_config();
        match blank {
            0 => config.service_id.clear(),
            1 => config.template_id.clear(),
            _ => config.account_id.clear(),
        }
        assert!(!config.is_complete());
    }

    let empty = DeliveryConfig {
        service_id: String::new(),
        template_id: String::new(),
        account_id: String::new(),
    };
    assert!(!empty.is_complete());
}
