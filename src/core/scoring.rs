use chrono::{DateTime, Utc};

use crate::core::normalize::{
    budget_level, days_until_start, distance_km, duration_months, income_value,
    preference_item_count, safety_level, INCOME_CEIL, INCOME_FLOOR, MAX_DISTANCE_KM,
    MAX_DURATION_MONTHS, MAX_LEVEL,
};
use crate::models::{FactorWeights, RawPreference};

/// Days out at which the start-date factor decays to zero.
pub const START_HORIZON_DAYS: f64 = 180.0;

/// Declared preference items at which the preference factor saturates.
pub const PREFERENCE_SATURATION: f64 = 5.0;

/// Calculate a lead suitability score (0-100) for a single preference record.
///
/// Scoring breakdown (point caps under default weights):
///     income        0-20    higher income = higher score
///     budget        0-15    higher budget level = higher score
///     duration      0-20    longer stay = higher score
///     safety        0-10    higher safety demand = higher score
///     distance      0-10    shorter move = higher score
///     start date    0-10    sooner start = higher score
///     preferences   0-15    more declared items = higher score
///
/// Each sub-score is independently clamped to its cap before summation, so an
/// out-of-range input saturates instead of overflowing. The record is scored
/// in isolation: the result depends only on the record itself, the weights,
/// and `now` (for the start-date factor).
pub fn calculate_lead_score(
    record: &RawPreference,
    now: DateTime<Utc>,
    weights: &FactorWeights,
) -> f64 {
    let income = income_subscore(income_value(record.income.as_deref()), weights.income);

    let budget = level_subscore(budget_level(record.budget.as_deref()), weights.budget);

    let duration = ratio_subscore(
        duration_months(record.duration.as_deref()),
        MAX_DURATION_MONTHS,
        weights.duration,
    );

    let safety = level_subscore(safety_level(record.safety.as_deref()), weights.safety);

    let distance = distance_subscore(distance_km(record.distance.as_deref()), weights.distance);

    let start = start_date_subscore(
        days_until_start(record.start_date.as_deref(), now),
        weights.start_date,
    );

    let preferences = preference_subscore(preference_item_count(record), weights.preferences);

    let total = income + budget + duration + safety + distance + start + preferences;
    total.clamp(0.0, 100.0)
}

/// Income sub-score, linear from the floor representative (0 points) to the
/// ceiling representative (full cap). The degrade floor thus contributes
/// nothing, so a record with no usable fields scores exactly zero.
#[inline]
fn income_subscore(income: f64, cap: f64) -> f64 {
    let normalized = (income - INCOME_FLOOR) / (INCOME_CEIL - INCOME_FLOOR);
    cap * normalized.clamp(0.0, 1.0)
}

/// Ordinal level sub-score (budget, safety): linear against the max level.
#[inline]
fn level_subscore(level: f64, cap: f64) -> f64 {
    cap * (level / MAX_LEVEL).clamp(0.0, 1.0)
}

/// Generic linear sub-score against a fixed maximum.
#[inline]
fn ratio_subscore(value: f64, max: f64, cap: f64) -> f64 {
    cap * (value / max).clamp(0.0, 1.0)
}

/// Distance sub-score: inverted, closer moves score higher, zero at the
/// farthest bucket bound.
#[inline]
fn distance_subscore(km: f64, cap: f64) -> f64 {
    cap * (1.0 - km / MAX_DISTANCE_KM).clamp(0.0, 1.0)
}

/// Start-date sub-score: full points for starting now, linearly decaying to
/// zero at the horizon. No parseable date means no points.
#[inline]
fn start_date_subscore(days: Option<f64>, cap: f64) -> f64 {
    match days {
        Some(d) => cap * (1.0 - d / START_HORIZON_DAYS).clamp(0.0, 1.0),
        None => 0.0,
    }
}

/// Preference sub-score: linear in the declared item count, saturating.
#[inline]
fn preference_subscore(items: usize, cap: f64) -> f64 {
    cap * ((items as f64) / PREFERENCE_SATURATION).clamp(0.0, 1.0)
}
