use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use perto_core::{Category, Coordinates, PositionState, UserPosition};
use perto_discovery::{format_distance, normalize, ranked_entries, RankError, SortCriterion};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CategoryItem {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub place_count: usize,
}

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CategoryItem>>> {
    let data = Category::ALL
        .iter()
        .map(|category| CategoryItem {
            slug: category.slug(),
            display_name: category.display_name(),
            place_count: state
                .catalog
                .places()
                .iter()
                .filter(|place| normalize(&place.category) == category.slug())
                .count(),
        })
        .collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[derive(Debug, Deserialize)]
pub(super) struct BrowseParams {
    sort: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct BrowseData {
    pub category: CategorySummary,
    pub sort: &'static str,
    pub entries: Vec<BrowseItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct CategorySummary {
    pub slug: &'static str,
    pub display_name: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct BrowseItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub short_description: Option<String>,
    pub tags: Vec<String>,
    pub rating: Option<f64>,
    pub images: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub location_text: Option<String>,
    pub distance_km: Option<f64>,
    /// Pre-formatted display string; empty when the distance is unknown.
    pub distance_text: String,
}

pub(super) async fn browse_category(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(category_slug): Path<String>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<ApiResponse<BrowseData>>, ApiError> {
    let category = Category::from_slug(&normalize(&category_slug)).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("category '{category_slug}' not found"),
        )
    })?;

    let criterion = match params.sort.as_deref() {
        Some(raw) => raw.parse::<SortCriterion>().map_err(|e| {
            ApiError::new(req_id.0.clone(), "validation_error", e.to_string())
        })?,
        None => SortCriterion::default(),
    };

    let position = position_from_params(&req_id, params.lat, params.lon)?;

    let entries = ranked_entries(state.catalog.places(), category.slug(), &position, criterion)
        .map_err(|error| match error {
            RankError::PositionRequired => ApiError::new(
                req_id.0.clone(),
                "position_required",
                "distance sort requires lat and lon query parameters",
            ),
            RankError::UnknownCriterion(_) => {
                ApiError::new(req_id.0.clone(), "validation_error", error.to_string())
            }
        })?;

    let entries = entries
        .into_iter()
        .map(|entry| BrowseItem {
            id: entry.place.id,
            name: entry.place.name,
            category: entry.place.category,
            short_description: entry.place.short_description,
            tags: entry.place.tags,
            rating: entry.place.rating,
            images: entry.place.images,
            coordinates: entry.place.coordinates,
            location_text: entry.place.location_text,
            distance_text: format_distance(entry.distance_km),
            distance_km: entry.distance_km,
        })
        .collect();

    Ok(Json(ApiResponse {
        data: BrowseData {
            category: CategorySummary {
                slug: category.slug(),
                display_name: category.display_name(),
            },
            sort: criterion.slug(),
            entries,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Maps the `lat`/`lon` query parameters onto the position lifecycle: both
/// present means the caller's geolocation already resolved, neither means it
/// was never requested, and half a pair is a caller bug.
fn position_from_params(
    req_id: &RequestId,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<PositionState, ApiError> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Ok(PositionState::Resolved(UserPosition {
            latitude,
            longitude,
        })),
        (None, None) => Ok(PositionState::Unrequested),
        _ => Err(ApiError::new(
            req_id.0.clone(),
            "validation_error",
            "lat and lon must be provided together",
        )),
    }
}
