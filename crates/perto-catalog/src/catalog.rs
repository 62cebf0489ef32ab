use chrono::{DateTime, Utc};
use perto_core::Place;

/// The immutable merged snapshot of every category source.
///
/// Constructed fully before anyone can see it and shared behind an `Arc`
/// afterwards — consumers observe either the pre-load empty state or the
/// complete merge, never an interleaving. Places are kept in source
/// declaration order, then intra-source order.
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    #[must_use]
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places,
            loaded_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Looks up a single place by id. A miss is an expected condition the
    /// caller renders as "not found", not a failure.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Local {id}"),
            category: "lazer".to_string(),
            short_description: None,
            tags: vec![],
            rating: None,
            images: vec![],
            coordinates: None,
            location_text: None,
        }
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![place("1"), place("2")]);
        assert_eq!(catalog.get("2").map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn get_miss_is_none() {
        let catalog = Catalog::new(vec![place("1")]);
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn len_and_empty() {
        assert!(Catalog::new(vec![]).is_empty());
        assert_eq!(Catalog::new(vec![place("1")]).len(), 1);
    }
}
