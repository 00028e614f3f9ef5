//! Variants and behaviors declared outside the crate.
//!
//! Adding a variant needs no edits to existing behaviors, and a new
//! behavior can mix new and existing capabilities.

#![cfg(feature = "dispatch")]

use std::sync::Mutex;

use tola_patterns::dispatch::{Accept, Behavior, DosBehavior, Hayes, HayesCapability, UnixBehavior};
use tola_patterns::visited_variant;

visited_variant!(pub Courier => "Courier modem");

/// Logs every modem it configures.
#[derive(Default, Behavior)]
#[capabilities(CourierCapability, HayesCapability)]
struct Auditor {
    seen: Mutex<Vec<String>>,
}

impl CourierCapability for Auditor {
    fn visit(&self, courier: &Courier) {
        self.seen.lock().unwrap().push(courier.to_string());
    }
}

impl HayesCapability for Auditor {
    fn visit(&self, hayes: &Hayes) {
        self.seen.lock().unwrap().push(hayes.to_string());
    }
}

#[test]
fn test_existing_behaviors_skip_new_variant() {
    assert!(Courier.accept(&DosBehavior).is_skipped());
    assert!(Courier.accept(&UnixBehavior).is_skipped());
}

#[test]
fn test_new_behavior_spans_old_and_new_variants() {
    let auditor = Auditor::default();

    assert!(Courier.accept(&auditor).is_executed());
    assert!(Hayes.accept(&auditor).is_executed());

    let seen = auditor.seen.lock().unwrap();
    assert_eq!(*seen, vec!["Courier modem".to_string(), "Hayes modem".to_string()]);
}

#[test]
fn test_new_variant_display() {
    assert_eq!(Courier.to_string(), "Courier modem");
}
