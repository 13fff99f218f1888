use chrono::{DateTime, NaiveDate, Utc};

use crate::models::RawPreference;

/// Representative income for the lowest bucket, used as the degrade floor
/// for unrecognized or missing income values.
pub const INCOME_FLOOR: f64 = 15_000.0;

/// Representative income for the highest bucket; incomes above this saturate.
pub const INCOME_CEIL: f64 = 150_000.0;

/// Lower bound of the farthest distance bucket, in km.
pub const MAX_DISTANCE_KM: f64 = 1000.0;

/// Normalized months for a permanent relocation.
pub const MAX_DURATION_MONTHS: f64 = 24.0;

/// Highest budget/safety level.
pub const MAX_LEVEL: f64 = 3.0;

/// Convert an income bucket label (or free numeric text) to a representative
/// numeric income.
///
/// Bucket table:
/// - "0-30000"       -> 15000
/// - "30000-50000"   -> 40000
/// - "50000-100000"  -> 75000
/// - "100000+"       -> 150000
///
/// Free-form numeric text ("62000") parses directly. Anything else degrades
/// to the lowest bucket's representative value so one bad record cannot
/// abort the batch.
pub fn income_value(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return INCOME_FLOOR;
    };

    match raw.trim() {
        "0-30000" => 15_000.0,
        "30000-50000" => 40_000.0,
        "50000-100000" => 75_000.0,
        "100000+" => 150_000.0,
        other => other.parse::<f64>().map(|v| v.max(0.0)).unwrap_or(INCOME_FLOOR),
    }
}

/// Convert a budget label to an ordinal level (1-3). Unrecognized -> 0.
pub fn budget_level(raw: Option<&str>) -> f64 {
    level_of(raw)
}

/// Convert a safety label to an ordinal level (1-3). Unrecognized -> 0.
pub fn safety_level(raw: Option<&str>) -> f64 {
    level_of(raw)
}

fn level_of(raw: Option<&str>) -> f64 {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("low") => 1.0,
        Some("medium") => 2.0,
        Some("high") => 3.0,
        _ => 0.0,
    }
}

/// Convert a duration bucket to a representative stay length in months.
/// Unrecognized -> 0.
pub fn duration_months(raw: Option<&str>) -> f64 {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("0-3 months") => 1.5,
        Some("3-6 months") => 4.5,
        Some("6-12 months") => 9.0,
        Some("12+ months") => 15.0,
        Some("permanent") => 24.0,
        _ => 0.0,
    }
}

/// Convert a distance bucket to the numeric lower bound of its range, in km.
///
/// Distance is scored inversely (closer is better), so an unrecognized bucket
/// degrades to the farthest bound and contributes zero points, consistent
/// with the zero floor of the other factors.
pub fn distance_km(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        Some("0-100") => 0.0,
        Some("100-300") => 100.0,
        Some("300-500") => 300.0,
        Some("500-1000") => 500.0,
        _ => MAX_DISTANCE_KM,
    }
}

/// Whole days from `now` until the requested start date.
///
/// Accepts `YYYY-MM-DD` (the form's date input) or a full RFC 3339 timestamp.
/// Past dates clamp to 0 (the move can start immediately). Missing or
/// unparseable dates yield `None`, which the scorer treats as zero points.
pub fn days_until_start(raw: Option<&str>, now: DateTime<Utc>) -> Option<f64> {
    let raw = raw?.trim();

    let start = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;

    let days = (start - now.date_naive()).num_days();
    Some(days.max(0) as f64)
}

/// Total number of declared preference items across all preference-set
/// fields. A bare lifestyle string counts as one item.
pub fn preference_item_count(record: &RawPreference) -> usize {
    record.food_preferences.len()
        + record.transport_type.len()
        + record.accommodation_type.len()
        + record.lifestyle.as_ref().map_or(0, |l| l.item_count())
}
