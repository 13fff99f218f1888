//! Relo Leads - lead scoring and ranking service for a relocation assistance platform
//!
//! This library provides the scoring engine used by the admin analysis and
//! marketing-leads dashboards. It implements a three-stage pipeline -
//! normalize, score, rank - over a batch of raw preference submissions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{calculate_lead_score, RankResult, Ranker};
pub use models::{BatchMetrics, FactorWeights, Lifestyle, RankLeadsResponse, RawPreference, ScoredLead};
