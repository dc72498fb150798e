//! Utility modules shared by the calculations
//!
//! - Rounding: two-decimal reporting of adjusted yields

pub mod rounding;

pub use rounding::round_to_hundredths;
