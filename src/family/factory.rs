//! Themed factories and the selector that maps keys to them.

use super::product::{ElfArmy, ElfCastle, ElfKing, OrcArmy, OrcCastle, OrcKing};
use super::{Family, FamilyKey, Force, Ruler, Stronghold};
use crate::error::FactoryError;

/// Producer of one themed, internally consistent set of products.
///
/// A single factory instance makes every product of its theme, so the
/// products it returns never mix families.
pub trait KingdomFactory: Send + Sync {
    /// Key this factory is selected by.
    fn family(&self) -> FamilyKey;

    fn create_ruler(&self) -> Box<dyn Ruler>;

    fn create_stronghold(&self) -> Box<dyn Stronghold>;

    fn create_force(&self) -> Box<dyn Force>;

    /// Build a whole triple from this factory.
    fn create_family(&self) -> Family {
        Family {
            key: self.family(),
            ruler: self.create_ruler(),
            stronghold: self.create_stronghold(),
            force: self.create_force(),
        }
    }
}

/// Elven kingdom factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElfKingdomFactory;

impl KingdomFactory for ElfKingdomFactory {
    fn family(&self) -> FamilyKey {
        FamilyKey::Elf
    }

    fn create_ruler(&self) -> Box<dyn Ruler> {
        Box::new(ElfKing)
    }

    fn create_stronghold(&self) -> Box<dyn Stronghold> {
        Box::new(ElfCastle)
    }

    fn create_force(&self) -> Box<dyn Force> {
        Box::new(ElfArmy)
    }
}

/// Orcish kingdom factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrcKingdomFactory;

impl KingdomFactory for OrcKingdomFactory {
    fn family(&self) -> FamilyKey {
        FamilyKey::Orc
    }

    fn create_ruler(&self) -> Box<dyn Ruler> {
        Box::new(OrcKing)
    }

    fn create_stronghold(&self) -> Box<dyn Stronghold> {
        Box::new(OrcCastle)
    }

    fn create_force(&self) -> Box<dyn Force> {
        Box::new(OrcArmy)
    }
}

static ELF: ElfKingdomFactory = ElfKingdomFactory;
static ORC: OrcKingdomFactory = OrcKingdomFactory;

/// Maps a [`FamilyKey`] to its factory.
///
/// Factories are stateless, so the selector hands out shared singletons.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorySelector;

impl FactorySelector {
    /// Factory for `key`. Exhaustive over the closed key set.
    pub fn select(key: FamilyKey) -> &'static dyn KingdomFactory {
        match key {
            FamilyKey::Elf => &ELF,
            FamilyKey::Orc => &ORC,
        }
    }

    /// Factory for a family name such as `"elf"`.
    pub fn select_named(name: &str) -> Result<&'static dyn KingdomFactory, FactoryError> {
        let key: FamilyKey = name.parse()?;
        Ok(Self::select(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_one_to_one() {
        for key in FamilyKey::ALL {
            assert_eq!(FactorySelector::select(key).family(), key);
        }
    }

    #[test]
    fn test_select_named_rejects_unknown() {
        let err = FactorySelector::select_named("dwarf").err();
        assert_eq!(err, Some(FactoryError::UnsupportedKey("dwarf".into())));
    }

    #[test]
    fn test_create_family_is_single_themed() {
        let family = OrcKingdomFactory.create_family();
        assert_eq!(family.key(), FamilyKey::Orc);
        assert_eq!(family.ruler().family(), FamilyKey::Orc);
        assert_eq!(family.stronghold().family(), FamilyKey::Orc);
        assert_eq!(family.force().family(), FamilyKey::Orc);
    }
}
