use serde::{Deserialize, Serialize};

/// The five browsable categories of the catalog.
///
/// `Place::category` keeps the raw string from the data source so that
/// records with unknown categories survive the merge; this enum covers the
/// closed set the category routes and source files are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Alimentacao,
    Infantil,
    Beleza,
    Lazer,
    Pets,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Alimentacao,
        Category::Infantil,
        Category::Beleza,
        Category::Lazer,
        Category::Pets,
    ];

    /// The route/source key, e.g. `"alimentacao"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Alimentacao => "alimentacao",
            Category::Infantil => "infantil",
            Category::Beleza => "beleza",
            Category::Lazer => "lazer",
            Category::Pets => "pets",
        }
    }

    /// The pt-BR label shown to users, e.g. `"Alimentação"`.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Alimentacao => "Alimentação",
            Category::Infantil => "Infantil",
            Category::Beleza => "Beleza",
            Category::Lazer => "Lazer",
            Category::Pets => "Pets",
        }
    }

    /// Parses a slug into a category. Expects the lower-cased, accent-free
    /// form; returns `None` for anything outside the closed set.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Category> {
        match slug {
            "alimentacao" => Some(Category::Alimentacao),
            "infantil" => Some(Category::Infantil),
            "beleza" => Some(Category::Beleza),
            "lazer" => Some(Category::Lazer),
            "pets" => Some(Category::Pets),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A latitude/longitude pair in decimal degrees.
///
/// Only complete pairs exist in the domain model: a record with one half of
/// the pair on the wire normalizes to no coordinates at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single point-of-interest record ("local") in the merged catalog.
///
/// Created once when the category sources are fetched and merged, then never
/// mutated; per-request annotations (distance) are derived values layered on
/// top, not writes to the shared record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Stable unique identifier within the merged catalog.
    pub id: String,
    /// Display name. May be empty, never absent.
    pub name: String,
    /// Raw category value from the source. Usually one of the five
    /// [`Category`] slugs; unknown values are preserved but not browsable.
    pub category: String,
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Star rating, 0–5 inclusive. Absent is treated as 0 only at sort time.
    pub rating: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    pub coordinates: Option<Coordinates>,
    /// Free-text address/area string.
    pub location_text: Option<String>,
}
