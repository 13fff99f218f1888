// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BatchMetrics, FactorWeights, Lifestyle, RawPreference, ScoredLead, FEATURES_USED};
pub use requests::RankQuery;
pub use responses::{ErrorResponse, HealthResponse, RankLeadsResponse};
