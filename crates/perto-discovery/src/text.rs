use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Produces the comparison key used everywhere matching happens: lower-cased,
/// NFD-decomposed, with combining marks stripped.
///
/// `"Café União"` becomes `"cafe uniao"`. Idempotent, so keys can be compared
/// against each other directly.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_strips_diacritics() {
        assert_eq!(normalize("Café União"), "cafe uniao");
        assert_eq!(normalize("Alimentação"), "alimentacao");
        assert_eq!(normalize("BELEZA"), "beleza");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Café União", "São Paulo", "crianças", "PÃO DE AÇÚCAR", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn normalize_leaves_punctuation_and_digits_alone() {
        assert_eq!(normalize("Bistrô 21 - Jardins!"), "bistro 21 - jardins!");
    }

    #[test]
    fn normalize_output_has_no_combining_marks_or_uppercase() {
        let out = normalize("Āčcêñtòs Ümläuts ÇÃO");
        assert!(
            out.chars().all(|c| !is_combining_mark(c) && !c.is_uppercase()),
            "unexpected chars in {out:?}"
        );
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize(""), "");
    }
}
