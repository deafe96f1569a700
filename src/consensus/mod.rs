//! Consensus module - Block structure, hashing, validation and money rules

mod block;
mod validation;
mod difficulty;
mod money;

pub use block::*;
pub use validation::*;
pub use difficulty::*;
pub use money::*;
