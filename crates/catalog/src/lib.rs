//! Product catalog domain: an immutable, process-wide snapshot of the
//! storefront's products plus a pure query engine over it.
//!
//! The catalog is seeded once at startup and never mutated, so it can be
//! shared by reference across concurrent requests without coordination.

pub mod product;
pub mod query;
pub mod seed;

pub use product::{Catalog, Product};
pub use query::{ListQuery, Pagination, QueryResult, SortKey, run_query};
