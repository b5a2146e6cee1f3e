//! Ranking: stable descending sort and truncation.

use crate::scorer::ScoredDish;

/// Default number of recommendations to return.
pub const DEFAULT_LIMIT: usize = 3;

/// Sort scored dishes descending by score and keep the first `limit`.
///
/// The sort is stable, so dishes with equal scores keep their input order —
/// required for reproducible results. Fewer than `limit` dishes are
/// returned as-is.
pub fn rank(mut scored: Vec<ScoredDish>, limit: usize) -> Vec<ScoredDish> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}
