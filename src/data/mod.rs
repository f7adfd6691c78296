//! Data management module
//!
//! Price-bar series, collaborator traits for the external data sources, and
//! the TTL-cached history loader.

pub mod bar;
pub mod source;
pub mod cache;
pub mod history;

pub use bar::*;
pub use source::*;
pub use cache::*;
pub use history::*;
