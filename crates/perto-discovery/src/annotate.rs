use perto_core::{Place, UserPosition};
use serde::Serialize;

use crate::geo;

/// A place plus its per-request computed distance. Derived fresh on every
/// ranking request and never cached: the user's position can change between
/// calls, and the underlying [`Place`] stays untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub place: Place,
    pub distance_km: Option<f64>,
}

/// Attaches a distance to every entry.
///
/// The distance is computed only when the user position is known and the
/// entry carries a complete coordinate pair; anything else — including a
/// coordinate pair [`geo::distance_km`] rejects — degrades to `None`. This
/// function never fails: a bad coordinate on one record must not take down
/// the whole ranking.
#[must_use]
pub fn annotate(entries: Vec<Place>, user_position: Option<UserPosition>) -> Vec<RankedEntry> {
    entries
        .into_iter()
        .map(|place| {
            let distance_km = match (user_position, place.coordinates) {
                (Some(user), Some(coords)) => geo::distance_km(
                    user.latitude,
                    user.longitude,
                    coords.latitude,
                    coords.longitude,
                )
                .ok(),
                _ => None,
            };
            RankedEntry { place, distance_km }
        })
        .collect()
}
