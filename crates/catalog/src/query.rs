//! The catalog query engine: filter, search, sort, paginate, metadata.
//!
//! `run_query` is a pure function over the catalog slice. It never fails;
//! malformed paging inputs degrade per the slicing rules below instead of
//! erroring.

use std::cmp::{Ordering, Reverse};

use serde::Serialize;

use crate::product::Product;

pub const DEFAULT_LIMIT: i64 = 20;
pub const DEFAULT_PAGE: i64 = 1;

/// Request-scoped query parameters. Not stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    /// Raw sort key; anything `SortKey::parse` rejects is a no-op.
    pub sort: Option<String>,
    pub limit: i64,
    pub page: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            sort: None,
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

/// Recognized sort keys, closed set. Anything else preserves the insertion
/// order of the filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending lexicographic order on `name`.
    Name,
    /// Ascending numeric price.
    PriceLow,
    /// Descending numeric price.
    PriceHigh,
    /// Descending numeric rating.
    Rating,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Pagination metadata; `currentPage` and `itemsPerPage` echo the request
/// values without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// The page slice, in filtered/sorted order.
    pub items: Vec<Product>,
    pub pagination: Pagination,
}

/// Apply the full pipeline in fixed order: category filter, search filter,
/// sort, page slice, metadata.
pub fn run_query(products: &[Product], query: &ListQuery) -> QueryResult {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            query
                .category
                .as_deref()
                .map_or(true, |c| p.category == c)
        })
        .cloned()
        .collect();

    if let Some(term) = query.search.as_deref() {
        let needle = term.to_lowercase();
        filtered.retain(|p| p.matches_search(&needle));
    }

    if let Some(key) = query.sort.as_deref().and_then(SortKey::parse) {
        sort_products(&mut filtered, key);
    }

    let total_items = filtered.len() as i64;
    let start = (query.page - 1).saturating_mul(query.limit);
    let end = start.saturating_add(query.limit);
    let (lo, hi) = slice_window(filtered.len(), start, end);
    let items = filtered[lo..hi].to_vec();

    QueryResult {
        items,
        pagination: Pagination {
            current_page: query.page,
            total_pages: page_count(total_items, query.limit),
            total_items,
            items_per_page: query.limit,
        },
    }
}

/// All sorts are stable: equal keys keep the filtered sequence's order.
fn sort_products(items: &mut [Product], key: SortKey) {
    match key {
        SortKey::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceLow => items.sort_by_key(|p| p.price),
        SortKey::PriceHigh => items.sort_by_key(|p| Reverse(p.price)),
        SortKey::Rating => {
            items.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal))
        }
    }
}

/// Resolve a `[start, end)` window over `len` items with sequence-slice
/// semantics: negative offsets count back from the end of the sequence
/// rather than clamping to the front. Non-positive `page` values therefore
/// wrap, which is kept as-is.
fn slice_window(len: usize, start: i64, end: i64) -> (usize, usize) {
    let len = len as i64;
    let resolve = |i: i64| -> i64 {
        if i < 0 { (len + i).max(0) } else { i.min(len) }
    };
    let lo = resolve(start);
    let hi = resolve(end).max(lo);
    (lo as usize, hi as usize)
}

fn page_count(total_items: i64, limit: i64) -> i64 {
    match limit {
        0 => 0,
        l if l > 0 => (total_items + l - 1) / l,
        l => total_items / l,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, category: &str, name: &str, brand: &str, price: u32, rating: f32) -> Product {
        Product::new(id, category, name, brand, price, rating, format!("{name} 상품 설명"))
    }

    /// Eight `food` records plus two others, insertion order by id.
    fn fixture() -> Vec<Product> {
        vec![
            product(1, "food", "가 사료", "로얄캐닌", 45000, 4.7),
            product(2, "food", "나 사료", "오리젠", 52000, 4.8),
            product(3, "food", "다 사료", "힐스", 125000, 4.5),
            product(4, "food", "라 사료", "아카나", 89000, 4.9),
            product(5, "food", "마 사료", "웰니스", 55000, 4.6),
            product(6, "food", "바 사료", "퓨리나", 38000, 4.4),
            product(7, "food", "사 사료", "내추럴발란스", 68000, 4.2),
            product(8, "food", "아 사료", "블루버팔로", 78000, 4.1),
            product(9, "treats", "자 간식", "그린이즈", 12000, 4.5),
            product(10, "supplies", "차 목걸이", "펫라이트", 15000, 4.3),
        ]
    }

    #[test]
    fn unfiltered_query_reports_full_catalog_size() {
        let products = fixture();
        let result = run_query(&products, &ListQuery::default());
        assert_eq!(result.pagination.total_items, 10);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.pagination.total_pages, 1);
        assert_eq!(result.pagination.items_per_page, DEFAULT_LIMIT);
    }

    #[test]
    fn category_filter_composes_with_search() {
        let products = fixture();
        let result = run_query(
            &products,
            &ListQuery {
                category: Some("food".to_string()),
                search: Some("로얄".to_string()),
                ..ListQuery::default()
            },
        );
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].id, 1);
    }

    #[test]
    fn absent_category_yields_empty_set_not_error() {
        let products = fixture();
        let result = run_query(
            &products,
            &ListQuery {
                category: Some("toys".to_string()),
                ..ListQuery::default()
            },
        );
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.total_items, 0);
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[test]
    fn price_sorts_are_exact_reverses_for_distinct_prices() {
        let products = fixture();
        let low = run_query(
            &products,
            &ListQuery {
                sort: Some("price-low".to_string()),
                ..ListQuery::default()
            },
        );
        let high = run_query(
            &products,
            &ListQuery {
                sort: Some("price-high".to_string()),
                ..ListQuery::default()
            },
        );
        let mut reversed: Vec<u32> = high.items.iter().map(|p| p.id).collect();
        reversed.reverse();
        let ascending: Vec<u32> = low.items.iter().map(|p| p.id).collect();
        assert_eq!(ascending, reversed);
        assert!(low.items.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn rating_sorts_descending() {
        let products = fixture();
        let result = run_query(
            &products,
            &ListQuery {
                sort: Some("rating".to_string()),
                ..ListQuery::default()
            },
        );
        assert!(result.items.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn unrecognized_sort_key_preserves_insertion_order() {
        let products = fixture();
        let result = run_query(
            &products,
            &ListQuery {
                sort: Some("newest".to_string()),
                ..ListQuery::default()
            },
        );
        let ids: Vec<u32> = result.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn second_page_of_two_slices_positions_three_and_four() {
        let products = fixture();
        let result = run_query(
            &products,
            &ListQuery {
                category: Some("food".to_string()),
                limit: 2,
                page: 2,
                ..ListQuery::default()
            },
        );
        let ids: Vec<u32> = result.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(result.pagination.total_items, 8);
        assert_eq!(result.pagination.total_pages, 4);
        assert_eq!(result.pagination.current_page, 2);
        assert_eq!(result.pagination.items_per_page, 2);
    }

    #[test]
    fn non_positive_page_wraps_from_the_end() {
        let products = fixture();
        let food = ListQuery {
            category: Some("food".to_string()),
            limit: 2,
            ..ListQuery::default()
        };

        // page 0: window is [-2, 0) -> resolves to [6, 0) -> empty.
        let result = run_query(&products, &ListQuery { page: 0, ..food.clone() });
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.total_items, 8);

        // page -1: window is [-4, -2) -> resolves to [4, 6).
        let result = run_query(&products, &ListQuery { page: -1, ..food });
        let ids: Vec<u32> = result.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(result.pagination.current_page, -1);
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let products = fixture();
        let query = ListQuery {
            category: Some("food".to_string()),
            sort: Some("price-low".to_string()),
            limit: 3,
            page: 2,
            ..ListQuery::default()
        };
        assert_eq!(run_query(&products, &query), run_query(&products, &query));
    }

    #[test]
    fn pagination_metadata_serializes_camel_case() {
        let products = fixture();
        let result = run_query(&products, &ListQuery::default());
        let json = serde_json::to_value(&result.pagination).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalItems"], 10);
        assert_eq!(json["itemsPerPage"], 20);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: for positive paging inputs, a page never exceeds
            /// the limit and metadata reflects the pre-pagination count.
            #[test]
            fn page_never_exceeds_limit(limit in 1i64..30, page in 1i64..8) {
                let products = fixture();
                let result = run_query(
                    &products,
                    &ListQuery { limit, page, ..ListQuery::default() },
                );
                prop_assert!(result.items.len() as i64 <= limit);
                prop_assert_eq!(result.pagination.total_items, 10);
                prop_assert_eq!(result.pagination.current_page, page);
                prop_assert_eq!(result.pagination.items_per_page, limit);
            }

            /// Property: walking every page in order reconstructs the full
            /// filtered sequence exactly once.
            #[test]
            fn pages_partition_the_filtered_sequence(limit in 1i64..12) {
                let products = fixture();
                let full = run_query(
                    &products,
                    &ListQuery { limit: 100, ..ListQuery::default() },
                );
                let total_pages = run_query(
                    &products,
                    &ListQuery { limit, ..ListQuery::default() },
                )
                .pagination
                .total_pages;

                let mut walked: Vec<Product> = Vec::new();
                for page in 1..=total_pages {
                    walked.extend(
                        run_query(
                            &products,
                            &ListQuery { limit, page, ..ListQuery::default() },
                        )
                        .items,
                    );
                }
                prop_assert_eq!(walked, full.items);
            }

            /// Property: sorting never adds or drops records.
            #[test]
            fn sort_is_a_permutation(key in prop_oneof![
                Just("name"), Just("price-low"), Just("price-high"), Just("rating"), Just("bogus")
            ]) {
                let products = fixture();
                let result = run_query(
                    &products,
                    &ListQuery { sort: Some(key.to_string()), limit: 100, ..ListQuery::default() },
                );
                let mut ids: Vec<u32> = result.items.iter().map(|p| p.id).collect();
                ids.sort_unstable();
                prop_assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
            }
        }
    }
}
