pub mod candidates;
pub mod ranking;
pub mod recommendations;
pub mod scoring;

pub use recommendations::get_recommendations;
pub use scoring::{score_product, ScoreBreakdown, ScoredCandidate};
