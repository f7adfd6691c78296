//! Portfolio management module
//!
//! Static holdings joined with live quotes into a valued, aggregated view.

pub mod holding;
pub mod valuation;

pub use holding::*;
pub use valuation::*;
