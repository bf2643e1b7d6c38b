use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::app::errors;

pub mod animals;
pub mod chat;
pub mod marketplace;
pub mod products;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/brands", get(products::list_brands))
        .route("/abandoned-animals", get(animals::list_abandoned))
        .route("/coupang-products", get(marketplace::list_products))
        .route("/chat", post(chat::chat))
        .fallback(not_found)
}

async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "Not Found")
}
