pub mod annotate;
pub mod filter;
pub mod geo;
pub mod rank;
pub mod search;
pub mod text;

pub use annotate::{annotate, RankedEntry};
pub use filter::filter_by_category;
pub use geo::{distance_km, format_distance, GeoError};
pub use rank::{ranked_entries, sort_entries, RankError, SortCriterion};
pub use search::search;
pub use text::normalize;
