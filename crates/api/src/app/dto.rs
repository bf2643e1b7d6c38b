//! Request parameter DTOs.
//!
//! List-style numeric parameters parse leniently: anything unusable falls
//! back to its default so the catalog endpoints never reject a request.

use serde::Deserialize;

use acn_catalog::ListQuery;
use acn_catalog::query::{DEFAULT_LIMIT, DEFAULT_PAGE};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        ListQuery {
            category: self.category,
            search: self.search,
            sort: self.sort,
            limit: parse_or(self.limit.as_deref(), DEFAULT_LIMIT),
            page: parse_or(self.page.as_deref(), DEFAULT_PAGE),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PriceRangeParams {
    pub min: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimalParams {
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketplaceParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "sellerProductId")]
    pub seller_product_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Lenient numeric parse with a fallback default.
pub fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_paging_falls_back_to_defaults() {
        let query = ListParams {
            limit: Some("abc".to_string()),
            page: Some("".to_string()),
            ..ListParams::default()
        }
        .into_query();
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.page, DEFAULT_PAGE);
    }

    #[test]
    fn negative_paging_is_passed_through_unvalidated() {
        let query = ListParams {
            limit: Some("2".to_string()),
            page: Some("-1".to_string()),
            ..ListParams::default()
        }
        .into_query();
        assert_eq!(query.limit, 2);
        assert_eq!(query.page, -1);
    }
}
