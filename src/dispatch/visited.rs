//! The visited side of the handshake and the dispatch outcome.

use core::any::type_name;
use core::fmt;

use tracing::{debug, info};

use super::Behavior;

/// Member of a closed hierarchy that behaviors can act upon.
///
/// Each variant names exactly one capability trait (as `dyn Trait`) and
/// knows how to hand itself to it. Variants depend only on their own
/// capability, never on the behaviors.
pub trait Visited: fmt::Display {
    /// Capability a behavior must provide to act on this variant.
    type Capability: ?Sized + 'static;

    /// Invoke the capability-specific operation with `self`.
    fn deliver(&self, capability: &Self::Capability);
}

/// Result of one [`Accept::accept`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The behavior ran its variant-specific logic.
    Executed,
    /// The behavior lacks the capability. Informational only.
    Skipped {
        /// Type name of the capability the variant requires.
        required: &'static str,
    },
}

impl Dispatch {
    pub fn is_executed(&self) -> bool {
        matches!(self, Dispatch::Executed)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Dispatch::Skipped { .. })
    }
}

/// Entry point of capability-gated dispatch.
pub trait Accept {
    /// Run `behavior` against `self` if it supports the required capability,
    /// otherwise trace the skip and return.
    fn accept(&self, behavior: &dyn Behavior) -> Dispatch;
}

/// Test `behavior` for `visited`'s capability and deliver on a match.
///
/// A mismatch is the common case and never escapes as an error.
pub fn accept<V>(visited: &V, behavior: &dyn Behavior) -> Dispatch
where
    V: Visited + ?Sized,
{
    let capabilities = behavior.capabilities();
    match capabilities.cast::<V::Capability>(behavior.as_any()) {
        Some(capability) => {
            debug!(visited = %visited, behavior = behavior.name(), "dispatching");
            visited.deliver(capability);
            Dispatch::Executed
        }
        None => {
            let required = type_name::<V::Capability>();
            info!(
                visited = %visited,
                behavior = behavior.name(),
                required,
                "behavior does not support visited variant, skipping"
            );
            Dispatch::Skipped { required }
        }
    }
}

/// Ordered outcomes of a [`dispatch_all`] walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    outcomes: Vec<Dispatch>,
}

impl DispatchReport {
    pub fn outcomes(&self) -> &[Dispatch] {
        &self.outcomes
    }

    pub fn executed(&self) -> usize {
        self.outcomes.iter().filter(|d| d.is_executed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|d| d.is_skipped()).count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Walk `(visited, behavior)` pairs in order, dispatching each.
pub fn dispatch_all<'a, A, I>(pairs: I) -> DispatchReport
where
    A: Accept + ?Sized + 'a,
    I: IntoIterator<Item = (&'a A, &'a dyn Behavior)>,
{
    let outcomes = pairs
        .into_iter()
        .map(|(visited, behavior)| visited.accept(behavior))
        .collect();
    DispatchReport { outcomes }
}
