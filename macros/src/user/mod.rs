//! User-facing derive implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Behavior)]` | on struct/enum | Implement `Behavior` |

pub mod behavior;
