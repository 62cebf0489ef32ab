//! Wire types for the category JSON sources.
//!
//! ## Observed shape of the upstream documents
//!
//! Each source is a JSON array of place records keyed in Portuguese:
//! `nome`, `categoria`, `descricao_curta`, `estrelas`, `imagens`,
//! `coordenadas`, `localizacao_texto`, `tags`.
//!
//! ### `id`
//! Appears as a JSON number in some files and a string in others; both forms
//! are accepted and normalized to the string form. Records without an id are
//! not usable (detail lookup is keyed on it) and are dropped during
//! normalization.
//!
//! ### `coordenadas`
//! An object `{"latitude": ..., "longitude": ...}`. Some records carry only
//! one half of the pair; a partial pair is as useless as none, so it
//! normalizes to no coordinates at all.
//!
//! ### `estrelas`
//! A number expected in 0–5. Out-of-range values have been observed in
//! hand-edited files and are dropped rather than clamped.
//!
//! ### Optional text fields
//! `descricao_curta` and `localizacao_texto` may be absent, `null`, or an
//! empty string; all three normalize to absent.

use serde::Deserialize;

/// A place identifier as it appears on the wire: number or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Integer(i64),
    Text(String),
}

impl RawId {
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            RawId::Integer(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// A possibly-partial coordinate pair from the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCoordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One place record as it appears in a category source document.
#[derive(Debug, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub id: Option<RawId>,

    /// Display name. Missing and `null` decode to absent and normalize to
    /// the empty string.
    #[serde(default)]
    pub nome: Option<String>,

    /// Category value. When absent the record inherits the category of the
    /// source file it came from.
    #[serde(default)]
    pub categoria: Option<String>,

    #[serde(default)]
    pub descricao_curta: Option<String>,

    /// Star rating, expected 0–5.
    #[serde(default)]
    pub estrelas: Option<f64>,

    /// Image URLs. Empty array when the record has no gallery.
    #[serde(default)]
    pub imagens: Vec<String>,

    #[serde(default)]
    pub coordenadas: Option<RawCoordinates>,

    #[serde(default)]
    pub localizacao_texto: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}
