//! Clients for the three third-party APIs the storefront proxies.
//!
//! Every call is attempted exactly once per request: no retries, no
//! timeouts beyond the transport defaults, no caching of responses.
//! Failures are surfaced as [`UpstreamError`] and mapped by the API layer
//! to either a degraded success payload or a generic error response.

pub mod animals;
pub mod chat;
pub mod error;
pub mod marketplace;

pub use animals::{AnimalPage, AnimalRegistryClient};
pub use chat::ChatClient;
pub use error::UpstreamError;
pub use marketplace::{MarketItem, MarketPage, MarketplaceClient};
