// Core algorithm exports
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use normalize::{
    budget_level, days_until_start, distance_km, duration_months, income_value,
    preference_item_count, safety_level,
};
pub use ranker::{RankResult, Ranker};
pub use scoring::calculate_lead_score;
