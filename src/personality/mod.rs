//! Personality type codec.
//!
//! Keeps a 4-letter type code and four 0-100 sliders consistent in both
//! directions. Both directions are lossy on purpose: sliders collapse to a
//! letter at a strict `> 50` threshold, and a typed letter collapses its
//! slider to 0 or 100.

pub mod types;
pub mod codec;

pub use types::*;
pub use codec::*;
