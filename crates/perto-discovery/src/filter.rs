use perto_core::Place;

use crate::text::normalize;

/// Returns every place whose category matches `category_key` under text
/// normalization. An empty result is a valid answer, not an error — unknown
/// category keys simply match nothing.
#[must_use]
pub fn filter_by_category(catalog: &[Place], category_key: &str) -> Vec<Place> {
    let key = normalize(category_key);
    catalog
        .iter()
        .filter(|place| normalize(&place.category) == key)
        .cloned()
        .collect()
}
