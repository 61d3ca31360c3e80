//! Reading insights: the oracle's record and the highlights derived from it.
//!
//! Everything here is a pure function of one `InsightsRecord`. Nothing is
//! mutated; a new draw brings a new record.

pub mod types;
pub mod aggregator;
pub mod summary;
pub mod fixture;

pub use types::*;
pub use aggregator::*;
pub use summary::*;
pub use fixture::demo_insights;
