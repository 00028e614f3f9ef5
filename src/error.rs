//! Error types.
//!
//! Only the string boundary of the family selector can fail. Selecting by
//! [`FamilyKey`](crate::family::FamilyKey) is exhaustive and infallible, and
//! a capability mismatch during dispatch is an outcome, not an error.

use thiserror::Error;

/// Failure to resolve a family factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The name does not match any family key.
    #[error("unsupported family key `{0}`")]
    UnsupportedKey(String),
}
