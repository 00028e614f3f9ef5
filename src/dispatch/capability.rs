//! Capability tables and the degenerate `Behavior` base trait.
//!
//! A behavior advertises the capability traits it implements through a
//! [`Capabilities`] table keyed by the `TypeId` of each capability trait
//! object. Each entry stores a caster that recovers `&dyn Capability` from
//! the behavior seen as `&dyn Any`. The table is the only thing a visited
//! variant asks of a behavior, so `Behavior` itself never names a variant.

use core::any::{Any, TypeId, type_name};
use core::fmt;
use std::collections::HashMap;

/// Recover a capability view of a behavior erased to `&dyn Any`.
pub type Caster<C> = for<'a> fn(&'a dyn Any) -> Option<&'a C>;

struct Entry {
    name: &'static str,
    // Always a `Caster<C>` for the `C` whose TypeId keys this entry.
    caster: Box<dyn Any + Send + Sync>,
}

/// Set of capability traits a behavior supports.
#[derive(Default)]
pub struct Capabilities {
    entries: HashMap<TypeId, Entry>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register capability `C` (a `dyn Trait` type) with its caster.
    ///
    /// Registering the same capability twice keeps the last caster.
    pub fn with<C: ?Sized + 'static>(mut self, caster: Caster<C>) -> Self {
        self.entries.insert(
            TypeId::of::<C>(),
            Entry {
                name: type_name::<C>(),
                caster: Box::new(caster),
            },
        );
        self
    }

    /// Whether capability `C` is registered.
    pub fn supports<C: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<C>())
    }

    /// View `behavior` through capability `C`.
    ///
    /// `None` when `C` is not registered or the behavior is not the type
    /// the caster was registered for.
    pub fn cast<'a, C: ?Sized + 'static>(&self, behavior: &'a dyn Any) -> Option<&'a C> {
        let entry = self.entries.get(&TypeId::of::<C>())?;
        let caster = entry.caster.downcast_ref::<Caster<C>>()?;
        caster(behavior)
    }

    /// Type names of the registered capabilities, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Degenerate base of every behavior.
///
/// Carries no per-variant operations. Implement it with
/// `#[derive(Behavior)]` and list the supported capability traits in a
/// `#[capabilities(...)]` attribute.
///
/// Support is decided by the [`Capabilities`] table alone: a capability
/// trait the type implements but does not list is skipped at dispatch.
pub trait Behavior: Any + Send + Sync {
    /// Name used in dispatch traces.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn capabilities(&self) -> &Capabilities;
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greet {
        fn greet(&self) -> &'static str;
    }

    trait Wave {}

    struct Greeter;

    impl Greet for Greeter {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    fn greeter_table() -> Capabilities {
        Capabilities::new().with::<dyn Greet>(|any| {
            any.downcast_ref::<Greeter>()
                .map(|g| g as &(dyn Greet + 'static))
        })
    }

    #[test]
    fn test_empty_table() {
        let caps = Capabilities::new();
        assert!(caps.is_empty());
        assert!(!caps.supports::<dyn Greet>());
        assert!(caps.cast::<dyn Greet>(&Greeter).is_none());
    }

    #[test]
    fn test_cast_registered_capability() {
        let caps = greeter_table();
        assert_eq!(caps.len(), 1);
        assert!(caps.supports::<dyn Greet>());
        assert!(!caps.supports::<dyn Wave>());

        let greet = caps.cast::<dyn Greet>(&Greeter);
        assert_eq!(greet.map(|g| g.greet()), Some("hello"));
    }

    #[test]
    fn test_cast_rejects_foreign_behavior() {
        // Table built for Greeter, queried with another type.
        let caps = greeter_table();
        assert!(caps.cast::<dyn Greet>(&42_u8).is_none());
    }

    #[test]
    fn test_names_are_type_names() {
        let caps = greeter_table();
        let names: Vec<_> = caps.names().collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with("Greet"));
    }
}
