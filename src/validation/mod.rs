//! Transaction module - inputs, outputs and the canonical hash layout

mod transaction;

pub use transaction::*;
