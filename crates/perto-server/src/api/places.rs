use axum::{
    extract::{Path, State},
    Extension, Json,
};
use perto_core::Place;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_places(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Place>>> {
    Json(ApiResponse {
        data: state.catalog.places().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_place(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Place>>, ApiError> {
    let place = state.catalog.get(&id).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("place '{id}' not found"),
        )
    })?;

    Ok(Json(ApiResponse {
        data: place.clone(),
        meta: ResponseMeta::new(req_id.0),
    }))
}
