//! Plain data structures persisted in the inventory document and returned by
//! the aggregation queries.

pub mod product;
pub mod stats;

pub use product::*;
pub use stats::*;
