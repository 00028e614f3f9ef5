//! # Family Factory
//!
//! Produces a themed, internally consistent triple of products from one of
//! several interchangeable factories.
//!
//! ```text
//! FamilyKey --FactorySelector::select--> &dyn KingdomFactory
//!                                            |
//!                     create_ruler / create_stronghold / create_force
//!                                            |
//!                                            v
//!                       Kingdom::create_family (whole triple swap)
//! ```
//!
//! ## Example
//!
//! ```
//! use tola_patterns::family::{ElfKing, FactorySelector, FamilyKey, Kingdom};
//!
//! let mut kingdom = Kingdom::new();
//! assert!(kingdom.ruler().is_none());
//!
//! kingdom.create_family(FactorySelector::select(FamilyKey::Elf));
//! let ruler = kingdom.ruler().map(|r| r.description());
//! assert_eq!(ruler, Some(ElfKing::DESCRIPTION));
//! ```

mod factory;
mod key;
mod kingdom;
mod product;

pub use factory::{ElfKingdomFactory, FactorySelector, KingdomFactory, OrcKingdomFactory};
pub use key::FamilyKey;
pub use kingdom::{Family, Kingdom};
pub use product::{
    ElfArmy, ElfCastle, ElfKing, Force, OrcArmy, OrcCastle, OrcKing, Product, Ruler, Stronghold,
};
