//! Themed products.
//!
//! Products are immutable values. Two products are the same product when
//! their descriptions match; allocation identity carries no meaning.

use core::fmt::Debug;

use super::FamilyKey;

/// Common surface of every product a [`KingdomFactory`](super::KingdomFactory) makes.
pub trait Product: Debug + Send + Sync {
    /// Fixed text identifying the product within its family.
    fn description(&self) -> &'static str;

    /// Family the product belongs to.
    fn family(&self) -> FamilyKey;
}

/// The ruler of a kingdom.
pub trait Ruler: Product {}

/// The seat of a kingdom.
pub trait Stronghold: Product {}

/// The armed force of a kingdom.
pub trait Force: Product {}

/// Declare a unit product with a fixed description.
macro_rules! product {
    ($(#[$meta:meta])* $name:ident: $role:ident, $key:ident, $description:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub const DESCRIPTION: &'static str = $description;
        }

        impl Product for $name {
            fn description(&self) -> &'static str {
                Self::DESCRIPTION
            }

            fn family(&self) -> FamilyKey {
                FamilyKey::$key
            }
        }

        impl $role for $name {}
    };
}

product!(ElfKing: Ruler, Elf, "This is the Elven king!");
product!(ElfCastle: Stronghold, Elf, "This is the Elven castle!");
product!(ElfArmy: Force, Elf, "This is the Elven Army!");

product!(OrcKing: Ruler, Orc, "This is the Orc king!");
product!(OrcCastle: Stronghold, Orc, "This is the Orc castle!");
product!(OrcArmy: Force, Orc, "This is the Orc Army!");
