use axum::{
    extract::{Query, State},
    Extension, Json,
};
use perto_discovery::{filter_by_category, search};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    q: Option<String>,
    category: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rating: Option<f64>,
    pub location_text: Option<String>,
}

/// Dropdown-style search: optional category pre-filter, free-text match,
/// then a result cap applied here — matching itself is uncapped.
pub(super) async fn search_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<SearchItem>>>, ApiError> {
    let Some(query) = params.q else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "missing required query parameter 'q'",
        ));
    };

    let subset = match params.category.as_deref() {
        Some(category_key) => filter_by_category(state.catalog.places(), category_key),
        None => state.catalog.places().to_vec(),
    };

    let limit = normalize_limit(params.limit, state.search_result_cap);
    let mut matches = search(&subset, &query);
    matches.truncate(limit);

    let data = matches
        .into_iter()
        .map(|place| SearchItem {
            id: place.id,
            name: place.name,
            category: place.category,
            rating: place.rating,
            location_text: place.location_text,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
