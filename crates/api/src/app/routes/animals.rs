use std::sync::Arc;

use axum::{Extension, Json, extract::Query};
use serde_json::json;

use acn_upstream::UpstreamError;

use crate::app::AppState;
use crate::app::dto::{self, AnimalParams};
use crate::app::errors::ApiError;

/// Proxy to the abandoned-animal public registry, normalized to
/// `{data, totalCount, page, size}`.
pub async fn list_abandoned(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<AnimalParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = dto::parse_or(params.page.as_deref(), 1);
    let size = dto::parse_or(params.size.as_deref(), 12);

    match state.animals.fetch(page, size).await {
        Ok(result) => Ok(Json(json!({
            "success": true,
            "data": {
                "data": result.items,
                "totalCount": result.total_count,
                "page": result.page,
                "size": result.size,
            },
        }))),
        Err(UpstreamError::Status(code)) => {
            tracing::error!("abandoned-animals upstream returned {code}");
            Err(ApiError::UpstreamUnavailable("Upstream API error".to_string()))
        }
        Err(err) => {
            tracing::error!("abandoned-animals proxy failed: {err}");
            Err(ApiError::Internal(
                "유기동물 데이터를 불러올 수 없습니다.".to_string(),
            ))
        }
    }
}
