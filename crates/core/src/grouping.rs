//! Display grouping and recency filtering.
//!
//! Both operations are pure and composable; the pipeline applies the
//! filter first and chunks the result for paged display.

use chrono::{DateTime, Duration, Utc};

use crate::clusters::ClusterRecord;

/// Display group width used by every partition.
pub const DEFAULT_CHUNK_SIZE: usize = 3;

/// Splits a sequence into consecutive fixed-size groups.
///
/// The final group may be shorter. Stable under stable input ordering;
/// grouping carries no meaning beyond display pagination. A zero size
/// yields no groups.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Keeps records whose identifier timestamp falls within the last
/// `cutoff_days` days of `now`.
///
/// Records whose identifier does not parse into a timestamp are excluded -
/// malformed records disappear from filtered views instead of counting as
/// always recent.
pub fn filter_recent(
    clusters: &[ClusterRecord],
    cutoff_days: i64,
    now: DateTime<Utc>,
) -> Vec<ClusterRecord> {
    let cutoff = (now - Duration::days(cutoff_days)).naive_utc();
    clusters
        .iter()
        .filter(|cluster| cluster.timestamp().is_some_and(|ts| ts >= cutoff))
        .cloned()
        .collect()
}
