//! Family discriminator.

use core::fmt;
use core::str::FromStr;

use crate::error::FactoryError;

/// Closed set of kingdom families.
///
/// Used only as a lookup discriminator for
/// [`FactorySelector`](super::FactorySelector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FamilyKey {
    Elf,
    Orc,
}

impl FamilyKey {
    /// Every key, in declaration order.
    pub const ALL: [FamilyKey; 2] = [FamilyKey::Elf, FamilyKey::Orc];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            FamilyKey::Elf => "elf",
            FamilyKey::Orc => "orc",
        }
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyKey {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FamilyKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FactoryError::UnsupportedKey(name.to_string()))
    }
}
