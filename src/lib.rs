//! # tola-patterns
//!
//! Two decoupling idioms with real design content, each usable on its own:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  family (feature "family")                                        |
//! |  - FamilyKey -> FactorySelector -> KingdomFactory                 |
//! |  - Kingdom: owns one themed triple, swapped as a whole            |
//! +-------------------------------------------------------------------+
//!
//! +-------------------------------------------------------------------+
//! |  dispatch (feature "dispatch")                                    |
//! |  - Visited variants, each gated on one capability trait           |
//! |  - Behavior: degenerate base + Capabilities table                 |
//! |  - accept: execute if supported, otherwise trace and skip         |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_patterns::prelude::*;
//!
//! visited_variant!(pub Printer => "Laser printer");
//!
//! #[derive(Behavior)]
//! #[capabilities(PrinterCapability)]
//! struct Calibrate;
//!
//! impl PrinterCapability for Calibrate {
//!     fn visit(&self, printer: &Printer) {
//!         tracing::info!("calibrating {printer}");
//!     }
//! }
//!
//! assert!(Printer.accept(&Calibrate).is_executed());
//! ```

// Allow `::tola_patterns` paths from derive output inside the crate itself
extern crate self as tola_patterns;

// Re-export paste for visited_variant!
pub use paste;

#[cfg(feature = "family")]
pub mod error;

#[cfg(feature = "family")]
pub mod family;

#[cfg(feature = "dispatch")]
pub mod dispatch;

// visited_variant!, has_capability!
pub mod syntax_macros;

#[cfg(feature = "family")]
pub use error::FactoryError;

/// Common items for both subsystems.
pub mod prelude {
    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::{
        Accept, Behavior, Capabilities, Dispatch, DispatchReport, Visited, dispatch_all,
    };
    #[cfg(feature = "family")]
    pub use crate::family::{
        FactorySelector, Family, FamilyKey, Force, Kingdom, KingdomFactory, Product, Ruler,
        Stronghold,
    };
    #[cfg(feature = "family")]
    pub use crate::error::FactoryError;
    #[cfg(feature = "dispatch")]
    pub use crate::{has_capability, visited_variant};
}
