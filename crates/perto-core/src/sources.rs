use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::place::Category;
use crate::ConfigError;

/// One category data source: where to fetch it and whether the catalog can
/// survive without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub category: Category,
    /// Path joined onto the configured data base URL, e.g. `"pets.json"`.
    pub path: String,
    /// A required source's failure aborts the whole catalog load; a
    /// non-required one degrades to an empty contribution.
    pub required: bool,
}

#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SourceDescriptor>,
}

/// Load and validate the catalog sources configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_sources(path: &Path) -> Result<SourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sources_file: SourcesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SourcesFileParse)?;

    validate_sources(&sources_file)?;

    Ok(sources_file)
}

fn validate_sources(sources_file: &SourcesFile) -> Result<(), ConfigError> {
    if sources_file.sources.is_empty() {
        return Err(ConfigError::Validation(
            "at least one source must be declared".to_string(),
        ));
    }

    let mut seen_categories = HashSet::new();

    for source in &sources_file.sources {
        if source.path.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "source '{}' has an empty path",
                source.category
            )));
        }

        if !seen_categories.insert(source.category) {
            return Err(ConfigError::Validation(format!(
                "duplicate source category: '{}'",
                source.category
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(category: Category, path: &str, required: bool) -> SourceDescriptor {
        SourceDescriptor {
            category,
            path: path.to_string(),
            required,
        }
    }

    #[test]
    fn validate_accepts_the_five_category_sources() {
        let sources_file = SourcesFile {
            sources: Category::ALL
                .iter()
                .map(|c| descriptor(*c, &format!("{}.json", c.slug()), *c != Category::Pets))
                .collect(),
        };
        assert!(validate_sources(&sources_file).is_ok());
    }

    #[test]
    fn validate_rejects_empty_list() {
        let sources_file = SourcesFile { sources: vec![] };
        let err = validate_sources(&sources_file).unwrap_err();
        assert!(err.to_string().contains("at least one source"));
    }

    #[test]
    fn validate_rejects_empty_path() {
        let sources_file = SourcesFile {
            sources: vec![descriptor(Category::Lazer, "  ", true)],
        };
        let err = validate_sources(&sources_file).unwrap_err();
        assert!(err.to_string().contains("empty path"));
    }

    #[test]
    fn validate_rejects_duplicate_category() {
        let sources_file = SourcesFile {
            sources: vec![
                descriptor(Category::Pets, "pets.json", false),
                descriptor(Category::Pets, "pets-extra.json", false),
            ],
        };
        let err = validate_sources(&sources_file).unwrap_err();
        assert!(err.to_string().contains("duplicate source category"));
    }

    #[test]
    fn sources_yaml_parses_category_slugs() {
        let yaml = "sources:\n  - category: alimentacao\n    path: alimentacao.json\n    required: true\n";
        let parsed: SourcesFile = serde_yaml::from_str(yaml).expect("parse yaml");
        assert_eq!(parsed.sources[0].category, Category::Alimentacao);
        assert!(parsed.sources[0].required);
    }

    #[test]
    fn load_sources_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("sources.yaml");
        assert!(
            path.exists(),
            "sources.yaml missing at {path:?} — required for this test"
        );
        let result = load_sources(&path);
        assert!(result.is_ok(), "failed to load sources.yaml: {result:?}");
        let sources_file = result.unwrap();
        assert_eq!(sources_file.sources.len(), 5);
        let pets = sources_file
            .sources
            .iter()
            .find(|s| s.category == Category::Pets)
            .expect("pets source declared");
        assert!(!pets.required, "pets is the tolerated source");
    }
}
