//! Environment-driven runtime configuration.
//!
//! Base URLs are overridable so tests can point the proxy clients at
//! unroutable endpoints; keys default to empty, which keeps the proxies on
//! their fallback paths.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the single-page app's static assets.
    pub public_dir: PathBuf,
    pub abandoned_api_url: String,
    pub abandoned_api_key: String,
    pub marketplace_api_url: String,
    pub marketplace_api_key: String,
    pub marketplace_access_token: String,
    pub chat_api_url: String,
    /// Absent or empty key means the chat endpoint answers from the canned
    /// matcher only.
    pub chat_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            abandoned_api_url: var_or(
                "ACN_ABANDONED_API_URL",
                acn_upstream::animals::DEFAULT_BASE_URL,
            ),
            abandoned_api_key: var_or("ACN_ABANDONED_API_KEY", ""),
            marketplace_api_url: var_or(
                "COUPANG_API_URL",
                acn_upstream::marketplace::DEFAULT_BASE_URL,
            ),
            marketplace_api_key: var_or("COUPANG_API_KEY", ""),
            marketplace_access_token: var_or("COUPANG_ACCESS_TOKEN", ""),
            chat_api_url: var_or("OPENAI_API_URL", acn_upstream::chat::DEFAULT_BASE_URL),
            chat_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
