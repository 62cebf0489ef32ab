use std::collections::HashSet;

use futures::future::join_all;
use perto_core::{Place, SourceDescriptor};

use crate::catalog::Catalog;
use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::normalize::normalize_place;

/// Fetches every declared source in parallel and merges the results into a
/// single [`Catalog`].
///
/// The operation completes only when every source has settled. A failed (or
/// undecodable) source that is not marked required contributes an empty list
/// to the merge; a required source's failure aborts the whole load. Merged
/// output follows source declaration order, then intra-source order — no
/// sort is applied here.
///
/// Individual malformed records inside an otherwise healthy source are
/// skipped with a warning rather than failing the source.
///
/// # Errors
///
/// Returns [`CatalogError::EssentialSourceUnavailable`] when a source marked
/// `required` fails to fetch or decode, carrying the category and the
/// underlying cause.
pub async fn load_catalog(
    client: &CatalogClient,
    base_url: &str,
    sources: &[SourceDescriptor],
) -> Result<Catalog, CatalogError> {
    let fetches = sources.iter().map(|descriptor| async move {
        let outcome = client.fetch_source(base_url, descriptor).await;
        (descriptor, outcome)
    });
    let settled = join_all(fetches).await;

    let mut lists = Vec::with_capacity(settled.len());
    for (descriptor, outcome) in settled {
        match outcome {
            Ok(raw_places) => {
                let mut places = Vec::with_capacity(raw_places.len());
                for raw in raw_places {
                    match normalize_place(raw, descriptor.category) {
                        Ok(place) => places.push(place),
                        Err(error) => {
                            tracing::warn!(
                                category = %descriptor.category,
                                error = %error,
                                "skipping malformed place record"
                            );
                        }
                    }
                }
                tracing::info!(
                    category = %descriptor.category,
                    count = places.len(),
                    "source loaded"
                );
                lists.push(places);
            }
            Err(error) if descriptor.required => {
                return Err(CatalogError::EssentialSourceUnavailable {
                    category: descriptor.category,
                    source: Box::new(error),
                });
            }
            Err(error) => {
                tracing::warn!(
                    category = %descriptor.category,
                    error = %error,
                    "tolerated source unavailable; contributing empty list"
                );
                lists.push(Vec::new());
            }
        }
    }

    Ok(Catalog::new(merge(lists)))
}

/// Flattens per-source lists in order, keeping the first occurrence of each
/// id and dropping later duplicates.
fn merge(lists: Vec<Vec<Place>>) -> Vec<Place> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for place in lists.into_iter().flatten() {
        if seen.insert(place.id.clone()) {
            merged.push(place);
        } else {
            tracing::warn!(id = %place.id, "duplicate place id in merge; keeping first occurrence");
        }
    }

    merged
}
