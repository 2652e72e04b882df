// Resume Scoring Engine
// Implements: keyword taxonomy, section detection, keyword matching, length evaluation,
// score aggregation and feedback. Pure and synchronous, no I/O in this module tree.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod length;
pub mod sections;
pub mod taxonomy;

pub use engine::{Report, ScoringEngine};
pub use length::WordRange;
