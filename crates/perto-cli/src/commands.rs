use std::time::Duration;

use anyhow::bail;
use perto_catalog::{load_catalog, Catalog, CatalogClient};
use perto_core::{AppConfig, Category, PositionState, UserPosition};
use perto_discovery::{filter_by_category, normalize, ranked_entries, RankError, SortCriterion};
use perto_location::{FixedPositionProvider, PositionTracker};

use crate::output;

/// Loads config, fetches every source, and returns the merged catalog.
///
/// Every subcommand starts here; an essential source failing is fatal to
/// the command, the same way it is fatal to server startup.
async fn fetch_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let sources_file = perto_core::load_sources(&config.sources_path)?;
    let client = CatalogClient::new(
        config.fetch_timeout_secs,
        &config.user_agent,
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )?;
    let catalog = load_catalog(&client, &config.data_base_url, &sources_file.sources).await?;
    Ok(catalog)
}

pub async fn fetch() -> anyhow::Result<()> {
    let config = perto_core::load_app_config()?;
    let catalog = fetch_catalog(&config).await?;
    println!("{}", output::render_catalog_summary(&catalog));
    Ok(())
}

pub async fn browse(
    category_key: &str,
    sort: &str,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<()> {
    let config = perto_core::load_app_config()?;

    let Some(category) = Category::from_slug(&normalize(category_key)) else {
        println!("category '{category_key}' not found");
        return Ok(());
    };

    let criterion = sort.parse::<SortCriterion>()?;

    let position = match (lat, lon) {
        (Some(latitude), Some(longitude)) => {
            let provider = FixedPositionProvider::resolving_to(UserPosition {
                latitude,
                longitude,
            });
            let mut tracker =
                PositionTracker::new(Duration::from_secs(config.geolocation_timeout_secs));
            tracker.resolve(&provider).await.clone()
        }
        (None, None) => PositionState::Unrequested,
        _ => bail!("--lat and --lon must be provided together"),
    };

    let catalog = fetch_catalog(&config).await?;

    let entries = match ranked_entries(catalog.places(), category.slug(), &position, criterion) {
        Ok(entries) => entries,
        Err(RankError::PositionRequired) => {
            // The advisory path: distance sorting is unavailable until a
            // position resolves, so fall back to the default criterion.
            println!("no position available for distance sorting; pass --lat and --lon");
            println!("falling back to {}", SortCriterion::default());
            ranked_entries(
                catalog.places(),
                category.slug(),
                &position,
                SortCriterion::default(),
            )?
        }
        Err(error) => return Err(error.into()),
    };

    println!("{}", output::render_entries(category, &entries));
    Ok(())
}

pub async fn search(
    query: &str,
    category_key: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let config = perto_core::load_app_config()?;
    let catalog = fetch_catalog(&config).await?;

    let subset = match category_key {
        Some(key) => filter_by_category(catalog.places(), key),
        None => catalog.places().to_vec(),
    };

    let mut matches = perto_discovery::search(&subset, query);
    matches.truncate(limit.unwrap_or(config.search_result_cap));

    println!("{}", output::render_matches(query, &matches));
    Ok(())
}

pub async fn show(id: &str) -> anyhow::Result<()> {
    let config = perto_core::load_app_config()?;
    let catalog = fetch_catalog(&config).await?;

    match catalog.get(id) {
        Some(place) => println!("{}", output::render_place(place)),
        None => println!("place '{id}' not found"),
    }
    Ok(())
}
