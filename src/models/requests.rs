use serde::{Deserialize, Serialize};

/// Query options for the rank endpoint
///
/// Re-submissions share an email; the engine scores them independently
/// unless the caller opts into deduplication here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankQuery {
    #[serde(default)]
    pub dedupe: bool,
}
