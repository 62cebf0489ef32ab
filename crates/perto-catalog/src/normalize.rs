//! Normalization from raw wire records to [`perto_core::Place`].

use perto_core::{Category, Coordinates, Place};

use crate::error::CatalogError;
use crate::types::RawPlace;

/// Normalizes a raw wire record into a [`Place`].
///
/// `source_category` is the category of the source file the record came
/// from; it fills in a missing or empty `categoria` field.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the record has no id. All
/// other oddities are soft: empty-string optionals become absent, partial
/// coordinate pairs and out-of-range ratings are dropped field-wise.
pub fn normalize_place(raw: RawPlace, source_category: Category) -> Result<Place, CatalogError> {
    let id = raw
        .id
        .ok_or_else(|| CatalogError::Normalization {
            category: source_category,
            reason: "record has no id".into(),
        })?
        .into_string();

    let category = raw
        .categoria
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| source_category.slug().to_string());

    // A rating outside 0–5 says more about the data entry than the place.
    let rating = raw
        .estrelas
        .filter(|r| r.is_finite() && (0.0..=5.0).contains(r));

    let coordinates = raw.coordenadas.and_then(|c| match (c.latitude, c.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    });

    Ok(Place {
        id,
        name: raw.nome.unwrap_or_default(),
        category,
        short_description: raw.descricao_curta.filter(|s| !s.is_empty()),
        tags: raw.tags,
        rating,
        images: raw.imagens,
        coordinates,
        location_text: raw.localizacao_texto.filter(|s| !s.is_empty()),
    })
}
