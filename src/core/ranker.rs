use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::core::scoring::calculate_lead_score;
use crate::models::{BatchMetrics, FactorWeights, RawPreference, ScoredLead};

/// Result of scoring and ranking a batch of preference records
#[derive(Debug)]
pub struct RankResult {
    pub rankings: Vec<ScoredLead>,
    pub metrics: BatchMetrics,
}

/// Main scoring orchestrator - runs the three-stage pipeline over a batch
///
/// # Pipeline Stages
/// 1. Normalize each record's bucketed fields against the fixed value tables
/// 2. Score each record independently (0-100)
/// 3. Rank the batch: stable descending sort, 1-based ranks
///
/// The engine is pure: it never filters records out (presentation layers
/// apply their own `score > 0` cut for the marketing view), and identical
/// input with an identical `now` always produces identical output.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: FactorWeights,
}

impl Ranker {
    pub fn new(weights: FactorWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: FactorWeights::default(),
        }
    }

    /// Score every record in the batch and return them ranked.
    ///
    /// `now` anchors the start-date factor; callers pass `Utc::now()` in
    /// production and a fixed instant in tests. Ties in score keep their
    /// original submission order (the sort is stable), so re-running on the
    /// same batch reproduces the same ranking.
    ///
    /// An empty batch yields an empty ranking with `total_customers: 0`.
    pub fn rank_leads(&self, records: Vec<RawPreference>, now: DateTime<Utc>) -> RankResult {
        let total_customers = records.len();

        let mut scored: Vec<(f64, RawPreference)> = records
            .into_iter()
            .map(|record| (calculate_lead_score(&record, now, &self.weights), record))
            .collect();

        // Stable descending sort by score; equal scores retain input order
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let rankings = scored
            .into_iter()
            .enumerate()
            .map(|(i, (score, record))| ScoredLead::from_record(record, score, i + 1))
            .collect();

        RankResult {
            rankings,
            metrics: BatchMetrics::new(total_customers, now),
        }
    }

    /// Collapse re-submissions: keep only the latest record per email,
    /// preserving the submission order of the survivors.
    ///
    /// Records are ordered oldest-first in the batch (insertion order from
    /// the store), so for a duplicated email the last occurrence wins.
    /// Records with an empty email are never collapsed.
    pub fn dedupe_by_email(records: Vec<RawPreference>) -> Vec<RawPreference> {
        let mut last_index: HashMap<String, usize> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if !record.email.is_empty() {
                last_index.insert(record.email.clone(), i);
            }
        }

        records
            .into_iter()
            .enumerate()
            .filter(|(i, record)| {
                record.email.is_empty() || last_index.get(&record.email) == Some(i)
            })
            .map(|(_, record)| record)
            .collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn record(email: &str, budget: Option<&str>) -> RawPreference {
        RawPreference {
            email: email.to_string(),
            budget: budget.map(str::to_string),
            ..RawPreference::default()
        }
    }

    #[test]
    fn test_rank_leads_sorts_descending() {
        let ranker = Ranker::with_default_weights();
        let records = vec![
            record("low@example.com", Some("low")),
            record("high@example.com", Some("high")),
            record("mid@example.com", Some("medium")),
        ];

        let result = ranker.rank_leads(records, fixed_now());

        assert_eq!(result.rankings.len(), 3);
        assert_eq!(result.rankings[0].email, "high@example.com");
        assert_eq!(result.rankings[1].email, "mid@example.com");
        assert_eq!(result.rankings[2].email, "low@example.com");
        assert_eq!(result.rankings[0].rank, 1);
        assert_eq!(result.rankings[1].rank, 2);
        assert_eq!(result.rankings[2].rank, 3);
        assert_eq!(result.metrics.total_customers, 3);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let ranker = Ranker::with_default_weights();
        let records = vec![
            record("first@example.com", Some("medium")),
            record("second@example.com", Some("medium")),
            record("third@example.com", Some("medium")),
        ];

        let result = ranker.rank_leads(records, fixed_now());

        assert_eq!(result.rankings[0].email, "first@example.com");
        assert_eq!(result.rankings[1].email, "second@example.com");
        assert_eq!(result.rankings[2].email, "third@example.com");
    }

    #[test]
    fn test_zero_score_records_are_kept() {
        let ranker = Ranker::with_default_weights();
        let records = vec![record("empty@example.com", None)];

        let result = ranker.rank_leads(records, fixed_now());

        assert_eq!(result.rankings.len(), 1);
        assert_eq!(result.rankings[0].score, 0.0);
        assert_eq!(result.rankings[0].rank, 1);
    }

    #[test]
    fn test_empty_batch() {
        let ranker = Ranker::with_default_weights();
        let result = ranker.rank_leads(vec![], fixed_now());

        assert!(result.rankings.is_empty());
        assert_eq!(result.metrics.total_customers, 0);
        assert_eq!(result.metrics.timestamp, fixed_now());
    }

    #[test]
    fn test_rank_leads_is_idempotent() {
        let ranker = Ranker::with_default_weights();
        let records = vec![
            record("a@example.com", Some("high")),
            record("b@example.com", Some("low")),
            record("c@example.com", Some("high")),
        ];
        let now = fixed_now();

        let first = ranker.rank_leads(records.clone(), now);
        let second = ranker.rank_leads(records, now);

        let emails = |r: &RankResult| {
            r.rankings
                .iter()
                .map(|l| (l.rank, l.email.clone(), l.score))
                .collect::<Vec<_>>()
        };
        assert_eq!(emails(&first), emails(&second));
    }

    #[test]
    fn test_dedupe_keeps_latest_submission() {
        let records = vec![
            record("repeat@example.com", Some("low")),
            record("other@example.com", Some("medium")),
            record("repeat@example.com", Some("high")),
        ];

        let deduped = Ranker::dedupe_by_email(records);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].email, "other@example.com");
        assert_eq!(deduped[1].email, "repeat@example.com");
        assert_eq!(deduped[1].budget.as_deref(), Some("high"));
    }

    #[test]
    fn test_dedupe_ignores_empty_emails() {
        let records = vec![record("", Some("low")), record("", Some("high"))];

        let deduped = Ranker::dedupe_by_email(records);
        assert_eq!(deduped.len(), 2);
    }
}
