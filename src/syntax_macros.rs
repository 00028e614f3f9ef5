//! Declarative macros for declaring visited variants and probing
//! capability implementations.

// =============================================================================
// visited_variant! - Declare a variant together with its capability trait
// =============================================================================

/// Declare a visited variant, its capability trait and its dispatch impls.
///
/// `visited_variant!(pub Hayes => "Hayes modem")` generates:
/// - a unit struct `Hayes` whose `Display` is `"Hayes modem"`
/// - a capability trait `HayesCapability` with `fn visit(&self, visited: &Hayes)`
/// - `Visited` with `Capability = dyn HayesCapability`, and `Accept`
///
/// New variants need no change to existing behaviors.
///
/// # Usage
///
/// ```ignore
/// visited_variant!(pub Hayes => "Hayes modem");
///
/// #[derive(Behavior)]
/// #[capabilities(HayesCapability)]
/// struct Configurator;
///
/// impl HayesCapability for Configurator {
///     fn visit(&self, hayes: &Hayes) { /* ... */ }
/// }
/// ```
#[macro_export]
macro_rules! visited_variant {
    ($(#[$meta:meta])* $vis:vis $Name:ident => $label:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            $vis struct $Name;

            #[doc = "Capability required to act on [`" $Name "`]."]
            $vis trait [<$Name Capability>] {
                fn visit(&self, visited: &$Name);
            }

            impl ::core::fmt::Display for $Name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str($label)
                }
            }

            impl $crate::dispatch::Visited for $Name {
                type Capability = dyn [<$Name Capability>];

                fn deliver(&self, capability: &Self::Capability) {
                    capability.visit(self)
                }
            }

            impl $crate::dispatch::Accept for $Name {
                fn accept(
                    &self,
                    behavior: &dyn $crate::dispatch::Behavior,
                ) -> $crate::dispatch::Dispatch {
                    $crate::dispatch::accept(self, behavior)
                }
            }
        }
    };
}

// =============================================================================
// has_capability! - Static counterpart of the runtime capability table
// =============================================================================

/// Check at compile time whether a concrete behavior implements the
/// capability trait of a variant declared with [`visited_variant!`].
///
/// `has_capability!(DosBehavior, Hayes)` asks whether `DosBehavior:
/// HayesCapability`. The runtime table built by `#[derive(Behavior)]` can
/// only list traits the type implements, so for derived behaviors a `true`
/// here is necessary for dispatch to execute, and the two agree whenever
/// every implemented capability is listed in `#[capabilities(...)]`.
///
/// Only meaningful for concrete types: an inherent const on the wrapper
/// shadows the fallback trait const when the bound holds.
///
/// ```
/// use tola_patterns::dispatch::Behavior;
/// use tola_patterns::{has_capability, visited_variant};
///
/// visited_variant!(pub Fax => "Fax modem");
///
/// #[derive(Behavior)]
/// #[capabilities(FaxCapability)]
/// struct Dial;
///
/// impl FaxCapability for Dial {
///     fn visit(&self, _: &Fax) {}
/// }
///
/// assert!(has_capability!(Dial, Fax));
/// assert!(!has_capability!(String, Fax));
/// ```
#[macro_export]
macro_rules! has_capability {
    ($Behavior:ty, $Variant:ident) => {
        $crate::paste::paste! {{
            struct __Supports<B>(::core::marker::PhantomData<B>);

            trait __Unsupported {
                const SUPPORTED: bool = false;
            }
            impl<B> __Unsupported for __Supports<B> {}

            impl<B: [<$Variant Capability>]> __Supports<B> {
                #[allow(dead_code)]
                const SUPPORTED: bool = true;
            }

            __Supports::<$Behavior>::SUPPORTED
        }}
    };
}
