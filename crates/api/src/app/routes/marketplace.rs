use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde_json::json;

use acn_upstream::marketplace;

use crate::app::AppState;
use crate::app::dto::{self, MarketplaceParams};
use crate::app::errors::ApiError;

/// Proxy to the marketplace product catalog.
///
/// The list path degrades to the static sample set on any failure so the
/// storefront keeps rendering; the single-product path surfaces a 502.
pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<MarketplaceParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(id) = params.seller_product_id.as_deref() {
        return match state.marketplace.product(id).await {
            Ok(data) => Ok(Json(json!({ "success": true, "data": data }))),
            Err(err) => {
                tracing::error!("marketplace product lookup failed: {err}");
                Err(ApiError::UpstreamUnavailable("쿠팡 API 오류".to_string()))
            }
        };
    }

    let page = dto::parse_or(params.page.as_deref(), 1);
    let limit = dto::parse_or(params.limit.as_deref(), 50);
    let category = params.category.as_deref();

    match state.marketplace.list(category, page, limit).await {
        Ok(result) => Ok(Json(json!({
            "success": true,
            "data": result.items,
            "pagination": { "page": page, "limit": limit, "total": result.total },
        }))),
        Err(err) => {
            tracing::warn!("marketplace list failed, serving samples: {err}");
            Ok(Json(json!({
                "success": true,
                "data": marketplace::sample_products(category),
                "isSample": true,
            })))
        }
    }
}
