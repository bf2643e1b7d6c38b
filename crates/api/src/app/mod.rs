//! HTTP application wiring (axum router + shared state).
//!
//! Layout:
//! - `routes/`: handlers, one file per API area
//! - `dto.rs`: request params and their lenient parsing
//! - `errors.rs`: the `{success:false, message}` error contract
//! - `header.rs`: auth-state header fragment rendering

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

use acn_catalog::Catalog;
use acn_upstream::{AnimalRegistryClient, ChatClient, MarketplaceClient};

use crate::config::Config;

pub mod dto;
pub mod errors;
pub mod header;
pub mod routes;

/// Shared per-process state. Everything here is read-only after startup,
/// so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub animals: AnimalRegistryClient,
    pub marketplace: MarketplaceClient,
    pub chat: ChatClient,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &Config) -> Router {
    let state = Arc::new(AppState {
        catalog: Catalog::seed(),
        animals: AnimalRegistryClient::new(&config.abandoned_api_url, &config.abandoned_api_key),
        marketplace: MarketplaceClient::new(
            &config.marketplace_api_url,
            &config.marketplace_api_key,
            &config.marketplace_access_token,
        ),
        chat: ChatClient::new(&config.chat_api_url, config.chat_api_key.clone()),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    // Any non-/api path serves the SPA; unknown files fall back to the
    // entry document.
    let index = config.public_dir.join("index.html");
    let spa = ServeDir::new(&config.public_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(errors::handle_panic))
                .layer(cors)
                .layer(Extension(state)),
        )
}
