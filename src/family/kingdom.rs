//! The aggregate holding the active product triple.

use tracing::info;

use super::{FamilyKey, Force, KingdomFactory, Ruler, Stronghold};

/// One complete triple of products, all from the same factory call.
#[derive(Debug)]
pub struct Family {
    pub(super) key: FamilyKey,
    pub(super) ruler: Box<dyn Ruler>,
    pub(super) stronghold: Box<dyn Stronghold>,
    pub(super) force: Box<dyn Force>,
}

impl Family {
    pub fn key(&self) -> FamilyKey {
        self.key
    }

    pub fn ruler(&self) -> &dyn Ruler {
        self.ruler.as_ref()
    }

    pub fn stronghold(&self) -> &dyn Stronghold {
        self.stronghold.as_ref()
    }

    pub fn force(&self) -> &dyn Force {
        self.force.as_ref()
    }
}

/// Owner of at most one active [`Family`].
///
/// [`create_family`](Kingdom::create_family) swaps the whole triple in one
/// assignment, so the accessors never observe products from two different
/// calls. There is no setter for a single product.
///
/// A `Kingdom` carries no internal locking. Callers sharing one across
/// threads must serialize access themselves.
#[derive(Debug, Default)]
pub struct Kingdom {
    family: Option<Family>,
}

impl Kingdom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active triple with a fresh one from `factory`.
    ///
    /// The previous triple is dropped, never merged.
    pub fn create_family(&mut self, factory: &dyn KingdomFactory) {
        let family = factory.create_family();
        info!(family = %family.key(), "kingdom family created");
        self.family = Some(family);
    }

    /// The active triple, if any.
    pub fn family(&self) -> Option<&Family> {
        self.family.as_ref()
    }

    pub fn ruler(&self) -> Option<&dyn Ruler> {
        self.family.as_ref().map(Family::ruler)
    }

    pub fn stronghold(&self) -> Option<&dyn Stronghold> {
        self.family.as_ref().map(Family::stronghold)
    }

    pub fn force(&self) -> Option<&dyn Force> {
        self.family.as_ref().map(Family::force)
    }

    /// Make a lone ruler from `factory` without touching the active triple.
    pub fn ruler_from(factory: &dyn KingdomFactory) -> Box<dyn Ruler> {
        factory.create_ruler()
    }

    /// Make a lone stronghold from `factory` without touching the active triple.
    pub fn stronghold_from(factory: &dyn KingdomFactory) -> Box<dyn Stronghold> {
        factory.create_stronghold()
    }

    /// Make a lone force from `factory` without touching the active triple.
    pub fn force_from(factory: &dyn KingdomFactory) -> Box<dyn Force> {
        factory.create_force()
    }
}
