use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::app::AppState;
use crate::app::dto::{ListParams, PriceRangeParams};
use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/price-range", get(price_range))
        .route("/category/:category", get(by_category))
        .route("/search/:query", get(search))
        .route("/:id", get(get_product))
}

/// Full query pipeline: filter, search, sort, paginate. Never errors.
pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let result = state.catalog.query(&params.into_query());
    Json(json!({
        "success": true,
        "data": result.items,
        "pagination": result.pagination,
    }))
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let product = id
        .parse::<u32>()
        .ok()
        .and_then(|id| state.catalog.get(id).cloned())
        .ok_or_else(|| ApiError::NotFound("상품을 찾을 수 없습니다.".to_string()))?;
    Ok(Json(json!({ "success": true, "data": product })))
}

/// Filter-only form: full matching set, no pagination.
pub async fn by_category(
    Extension(state): Extension<Arc<AppState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": state.catalog.by_category(&category),
        "category": category,
    }))
}

/// Search-only form: full matching set plus a count.
pub async fn search(
    Extension(state): Extension<Arc<AppState>>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    let q = query.to_lowercase();
    let data = state.catalog.search(&q);
    let count = data.len();
    Json(json!({
        "success": true,
        "data": data,
        "query": q,
        "count": count,
    }))
}

pub async fn list_brands(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "success": true, "data": state.catalog.brands() }))
}

/// Both bounds are mandatory and validated before any filtering happens.
pub async fn price_range(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<PriceRangeParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bound = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok());
    let (Some(min), Some(max)) = (bound(params.min.as_deref()), bound(params.max.as_deref()))
    else {
        return Err(ApiError::Validation(
            "최소값과 최대값을 모두 입력해주세요.".to_string(),
        ));
    };

    Ok(Json(json!({
        "success": true,
        "data": state.catalog.price_range(min, max),
        "priceRange": { "min": min, "max": max },
    })))
}
