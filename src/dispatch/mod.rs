//! # Capability-Gated Dispatch
//!
//! Attaches behaviors to a closed hierarchy of visited variants without a
//! dependency cycle between the two.
//!
//! ```text
//!   Visited variant ──requires──> its own capability trait (dyn XCapability)
//!          │                                   ^
//!        accept                                │ implements (0..n)
//!          │                                   │
//!          └──asks──> Behavior::capabilities ──┘  (TypeId -> caster table)
//! ```
//!
//! `Behavior` carries no per-variant method, so adding a variant never
//! touches existing behaviors, and adding a behavior never touches existing
//! variants. A behavior that lacks the required capability is skipped with
//! an informational trace; `accept` never fails.
//!
//! ## Example
//!
//! ```
//! use tola_patterns::dispatch::{Accept, DosBehavior, Hayes, Hpf, UnixBehavior};
//!
//! assert!(Hayes.accept(&DosBehavior).is_executed());
//! assert!(Hayes.accept(&UnixBehavior).is_skipped());
//! assert!(Hpf.accept(&DosBehavior).is_skipped());
//! ```

mod capability;
mod modem;
mod visited;

pub use capability::{Behavior, Capabilities, Caster};
pub use macros::Behavior;
pub use modem::{
    DosBehavior, Hayes, HayesCapability, Hpf, HpfBehavior, HpfCapability, Modem, UnixBehavior,
    Zoom, ZoomCapability,
};
pub use visited::{Accept, Dispatch, DispatchReport, Visited, accept, dispatch_all};
