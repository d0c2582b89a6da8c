//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::check_guess;
pub use simple::{run_simple, run_simple_with};
pub use stats::show_stats;
