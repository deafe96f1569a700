//! P2P support - peer clock samples and network-adjusted time

mod median_filter;
mod time;

pub use median_filter::*;
pub use time::*;
