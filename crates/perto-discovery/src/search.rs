use perto_core::Place;

use crate::text::normalize;

/// Free-text search over a set of places.
///
/// An empty (or all-diacritic/whitespace-normalizing-to-empty) query is a
/// no-op: the input comes back unchanged, not an empty result. Otherwise an
/// entry matches when the normalized query is a substring of its normalized
/// name, short description, or any tag. Input order is preserved; result
/// caps are the caller's concern.
#[must_use]
pub fn search(entries: &[Place], query: &str) -> Vec<Place> {
    let needle = normalize(query);
    if needle.trim().is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|place| matches_place(place, &needle))
        .cloned()
        .collect()
}

fn matches_place(place: &Place, needle: &str) -> bool {
    if normalize(&place.name).contains(needle) {
        return true;
    }
    if place
        .short_description
        .as_deref()
        .is_some_and(|description| normalize(description).contains(needle))
    {
        return true;
    }
    place.tags.iter().any(|tag| normalize(tag).contains(needle))
}
