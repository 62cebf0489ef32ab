//! Pure text rendering for the CLI commands. Kept free of I/O so the
//! formatting is testable without fetching anything.

use perto_catalog::Catalog;
use perto_core::{Category, Place};
use perto_discovery::{format_distance, normalize, RankedEntry};

pub fn render_catalog_summary(catalog: &Catalog) -> String {
    let mut lines = vec![format!("{} places loaded", catalog.len())];
    for category in Category::ALL {
        let count = catalog
            .places()
            .iter()
            .filter(|place| normalize(&place.category) == category.slug())
            .count();
        lines.push(format!("  {:<14} {count}", category.display_name()));
    }
    lines.join("\n")
}

pub fn render_entries(category: Category, entries: &[RankedEntry]) -> String {
    if entries.is_empty() {
        return format!("no places in '{}'", category.slug());
    }

    let mut lines = vec![format!(
        "{} — {} places",
        category.display_name(),
        entries.len()
    )];
    for entry in entries {
        lines.push(render_entry_line(entry));
    }
    lines.join("\n")
}

fn render_entry_line(entry: &RankedEntry) -> String {
    let rating = entry
        .place
        .rating
        .map_or_else(|| "unrated".to_string(), |r| format!("{r:.1}"));

    let distance = format_distance(entry.distance_km);
    if distance.is_empty() {
        format!("  {} [{rating}]", entry.place.name)
    } else {
        format!("  {} [{rating}] — {distance}", entry.place.name)
    }
}

pub fn render_matches(query: &str, matches: &[Place]) -> String {
    if matches.is_empty() {
        return format!("no results for '{query}'");
    }

    let mut lines = vec![format!("{} results for '{query}'", matches.len())];
    for place in matches {
        lines.push(format!("  {} ({}) — id {}", place.name, place.category, place.id));
    }
    lines.join("\n")
}

pub fn render_place(place: &Place) -> String {
    let mut lines = vec![
        format!("{} (id {})", place.name, place.id),
        format!("  category: {}", place.category),
    ];
    if let Some(rating) = place.rating {
        lines.push(format!("  rating: {rating:.1}"));
    }
    if let Some(description) = &place.short_description {
        lines.push(format!("  {description}"));
    }
    if let Some(location) = &place.location_text {
        lines.push(format!("  location: {location}"));
    }
    if let Some(coordinates) = place.coordinates {
        lines.push(format!(
            "  coordinates: {}, {}",
            coordinates.latitude, coordinates.longitude
        ));
    }
    if !place.tags.is_empty() {
        lines.push(format!("  tags: {}", place.tags.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str, name: &str, category: &str, rating: Option<f64>) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            short_description: None,
            tags: vec![],
            rating,
            images: vec![],
            coordinates: None,
            location_text: None,
        }
    }

    #[test]
    fn catalog_summary_counts_per_category() {
        let catalog = Catalog::new(vec![
            place("1", "Café União", "alimentacao", Some(4.7)),
            place("2", "Pet Shop A", "pets", None),
            place("3", "Pet Shop B", "pets", None),
        ]);
        let summary = render_catalog_summary(&catalog);
        assert!(summary.starts_with("3 places loaded"));
        assert!(summary.contains("Alimentação"));
        assert!(summary.lines().any(|l| l.contains("Pets") && l.contains('2')));
    }

    #[test]
    fn entry_line_includes_distance_when_known() {
        let entry = RankedEntry {
            place: place("1", "Pet Shop A", "pets", Some(4.0)),
            distance_km: Some(2.34),
        };
        let line = render_entry_line(&entry);
        assert_eq!(line, "  Pet Shop A [4.0] — Aprox. 2.3 km");
    }

    #[test]
    fn entry_line_omits_distance_when_unknown() {
        let entry = RankedEntry {
            place: place("1", "Pet Shop B", "pets", None),
            distance_km: None,
        };
        let line = render_entry_line(&entry);
        assert_eq!(line, "  Pet Shop B [unrated]");
    }

    #[test]
    fn empty_browse_and_search_render_friendly_messages() {
        assert_eq!(
            render_entries(Category::Pets, &[]),
            "no places in 'pets'"
        );
        assert_eq!(render_matches("sushi", &[]), "no results for 'sushi'");
    }

    #[test]
    fn place_detail_includes_optional_fields_when_present() {
        let mut p = place("7", "Café União", "alimentacao", Some(4.7));
        p.short_description = Some("cafés e pães".to_string());
        p.tags = vec!["café".to_string(), "padaria".to_string()];
        let rendered = render_place(&p);
        assert!(rendered.contains("Café União (id 7)"));
        assert!(rendered.contains("rating: 4.7"));
        assert!(rendered.contains("tags: café, padaria"));
    }
}
