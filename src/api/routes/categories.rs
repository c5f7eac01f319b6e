//! Category Routes
//!
//! - GET /api/v1/categories - List all categories

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CategoryListResponse, CategoryResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/categories
///
/// List all server categories.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoryListResponse>> {
    let categories: Vec<CategoryResponse> = state
        .store
        .list_categories()?
        .into_iter()
        .map(|c| CategoryResponse {
            id: c.id,
            name: c.name,
            description: c.description,
        })
        .collect();

    Ok(Json(CategoryListResponse {
        total: categories.len(),
        categories,
    }))
}
