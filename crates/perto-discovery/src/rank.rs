//! The ranking pipeline: category filter → distance annotation → sort.
//!
//! Results are a snapshot of the inputs they were computed from. They are
//! recomputed wholesale on every request rather than patched incrementally;
//! the moment the catalog, query, criterion, or user position changes, the
//! previous result is stale and the caller re-runs the pipeline.

use std::cmp::{Ordering, Reverse};
use std::str::FromStr;

use perto_core::{Place, PositionState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotate::{annotate, RankedEntry};
use crate::filter::filter_by_category;
use crate::text::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    DistanceAsc,
    /// The default a category listing opens with.
    #[default]
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortCriterion {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SortCriterion::DistanceAsc => "distance-asc",
            SortCriterion::RatingDesc => "rating-desc",
            SortCriterion::RatingAsc => "rating-asc",
            SortCriterion::NameAsc => "name-asc",
            SortCriterion::NameDesc => "name-desc",
        }
    }
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for SortCriterion {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance-asc" => Ok(SortCriterion::DistanceAsc),
            "rating-desc" => Ok(SortCriterion::RatingDesc),
            "rating-asc" => Ok(SortCriterion::RatingAsc),
            "name-asc" => Ok(SortCriterion::NameAsc),
            "name-desc" => Ok(SortCriterion::NameDesc),
            other => Err(RankError::UnknownCriterion(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Distance sorting was requested before the user position resolved.
    /// Non-fatal: the caller falls back to another criterion and surfaces an
    /// advisory while geolocation is pending or has failed.
    #[error("distance sort requires a resolved user position")]
    PositionRequired,

    #[error("unknown sort criterion: {0}")]
    UnknownCriterion(String),
}

/// Sorts ranked entries by the given criterion. All sorts are stable.
///
/// - `distance-asc`: known distances ascending; entries without a distance
///   come after every entry with one, keeping their relative order.
/// - `rating-desc` / `rating-asc`: missing rating counts as 0.
/// - `name-asc` / `name-desc`: compares the normalized name key, so accents
///   and case do not split the ordering. Empty names sort first ascending
///   and last descending.
#[must_use]
pub fn sort_entries(mut entries: Vec<RankedEntry>, criterion: SortCriterion) -> Vec<RankedEntry> {
    match criterion {
        SortCriterion::DistanceAsc => entries.sort_by(compare_distance),
        SortCriterion::RatingDesc => {
            entries.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a)));
        }
        SortCriterion::RatingAsc => {
            entries.sort_by(|a, b| rating_of(a).total_cmp(&rating_of(b)));
        }
        SortCriterion::NameAsc => entries.sort_by_cached_key(|e| normalize(&e.place.name)),
        SortCriterion::NameDesc => {
            entries.sort_by_cached_key(|e| Reverse(normalize(&e.place.name)));
        }
    }
    entries
}

fn compare_distance(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn rating_of(entry: &RankedEntry) -> f64 {
    entry.place.rating.unwrap_or(0.0)
}

/// Runs the full pipeline for one ranking request: filter the catalog by
/// category, annotate with distances from the current position, sort.
///
/// # Errors
///
/// Returns [`RankError::PositionRequired`] when `distance-asc` is requested
/// and the position state is anything other than `Resolved` — pending and
/// failed geolocation both disable distance sorting until a position exists.
pub fn ranked_entries(
    catalog: &[Place],
    category_key: &str,
    position: &PositionState,
    criterion: SortCriterion,
) -> Result<Vec<RankedEntry>, RankError> {
    if criterion == SortCriterion::DistanceAsc && !position.is_resolved() {
        return Err(RankError::PositionRequired);
    }

    let filtered = filter_by_category(catalog, category_key);
    let annotated = annotate(filtered, position.position());
    Ok(sort_entries(annotated, criterion))
}
