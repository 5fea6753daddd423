//! Catalog data model for the multi-universe storefront.
//!
//! Everything in this crate is immutable once loaded: products, prices,
//! universes and the per-universe copy tables. Mutable session state lives in
//! `storefront-core`.

pub mod catalog;
pub mod copy;
pub mod error;
pub mod ids;
pub mod price;
pub mod product;
pub mod universe;

pub use catalog::{Catalog, CatalogFile, CatalogRepository};
pub use copy::UniverseCopy;
pub use error::{ModelError, Result};
pub use ids::ProductId;
pub use price::Price;
pub use product::Product;
pub use universe::{Page, Universe};
