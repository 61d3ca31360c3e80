//! A live reading: notes, the current spread, and its insights.

pub mod notes;
pub mod workspace;

pub use notes::*;
pub use workspace::*;
