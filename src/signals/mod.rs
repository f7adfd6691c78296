//! Rule-based signal generation
//!
//! Five independent threshold rules classifying the current market state of
//! an indicator-enriched series. None suppresses another; each degrades to
//! an insufficient-data variant when its inputs are still warming up.

pub mod wash_sale;
pub mod fibonacci;
pub mod report;

pub use wash_sale::*;
pub use fibonacci::*;
pub use report::*;
