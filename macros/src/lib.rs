//! Procedural macros for tola-patterns
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Behavior)]` | struct/enum | Implement `Behavior` with a capability table |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Behavior)]
//! #[capabilities(HayesCapability, ZoomCapability)]
//! struct DosBehavior;
//!
//! impl HayesCapability for DosBehavior { fn visit(&self, hayes: &Hayes) {} }
//! impl ZoomCapability for DosBehavior { fn visit(&self, zoom: &Zoom) {} }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod common;
mod user;

/// Implement `Behavior` for a concrete type.
///
/// The optional `#[capabilities(...)]` attribute lists the capability traits
/// the type implements. Each listed trait becomes an entry of a lazily built
/// static `Capabilities` table. Listing a trait the type does not implement
/// is a compile error, as is listing one twice. The list is the only thing
/// dispatch consults: an implemented capability left out of it is skipped.
#[proc_macro_derive(Behavior, attributes(capabilities))]
pub fn derive_behavior(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::behavior::expand_derive_behavior(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
