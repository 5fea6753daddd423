//! Read-only product catalog.
//!
//! The storefront never reaches for catalog data through globals: it is handed
//! a [`CatalogRepository`] at construction. [`Catalog`] is the in-memory
//! implementation, usually loaded from a JSON file of the form
//!
//! ```json
//! {
//!   "products": { "geek": [ { "id": "g1", "universe": "geek", ... } ] },
//!   "copy": { "geek": { "displayName": "MATHEORY GEEK", "nav": ["Início", "Camisetas"] } }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::{ModelError, Product, ProductId, Result, Universe, UniverseCopy};

/// Lookup contract consumed by the storefront core.
pub trait CatalogRepository {
    /// Products of one universe, in catalog order.
    fn products(&self, universe: Universe) -> &[Arc<Product>];

    /// Product by id across all universes; `None` for stale or unknown ids.
    fn product(&self, id: &ProductId) -> Option<&Arc<Product>>;

    /// Copy table of one universe, if supplied.
    fn copy(&self, universe: Universe) -> Option<&UniverseCopy>;
}

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub products: BTreeMap<Universe, Vec<Product>>,
    pub copy: BTreeMap<Universe, UniverseCopy>,
}

/// Validated, indexed catalog.
#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<Universe, Vec<Arc<Product>>>,
    index: HashMap<ProductId, Arc<Product>>,
    copy: BTreeMap<Universe, UniverseCopy>,
}

impl Catalog {
    /// Build a catalog, validating every product.
    ///
    /// Products must be listed under the universe they declare, ids must be
    /// unique, sizes and colors must be non-empty and unavailable sizes must
    /// be listed sizes.
    pub fn new(
        products: BTreeMap<Universe, Vec<Product>>,
        copy: BTreeMap<Universe, UniverseCopy>,
    ) -> Result<Self> {
        let mut catalog = Self {
            products: BTreeMap::new(),
            index: HashMap::new(),
            copy,
        };

        for (listed, list) in products {
            let mut bucket = Vec::with_capacity(list.len());
            for product in list {
                validate_product(listed, &product)?;
                let product = Arc::new(product);
                if catalog
                    .index
                    .insert(product.id.clone(), Arc::clone(&product))
                    .is_some()
                {
                    return Err(ModelError::DuplicateProduct(product.id.clone()));
                }
                bucket.push(product);
            }
            catalog.products.insert(listed, bucket);
        }

        Ok(catalog)
    }

    /// Build a catalog from a flat product list, grouping by declared universe.
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
        copy: BTreeMap<Universe, UniverseCopy>,
    ) -> Result<Self> {
        let mut grouped: BTreeMap<Universe, Vec<Product>> = BTreeMap::new();
        for product in products {
            grouped.entry(product.universe).or_default().push(product);
        }
        Self::new(grouped, copy)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.products, file.copy)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Total number of products across universes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All products, grouped by universe in page order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.values().flatten()
    }
}

impl CatalogRepository for Catalog {
    fn products(&self, universe: Universe) -> &[Arc<Product>] {
        self.products
            .get(&universe)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn product(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id)
    }

    fn copy(&self, universe: Universe) -> Option<&UniverseCopy> {
        self.copy.get(&universe)
    }
}

fn validate_product(listed: Universe, product: &Product) -> Result<()> {
    if product.universe != listed {
        return Err(ModelError::UniverseMismatch {
            id: product.id.clone(),
            listed,
            declared: product.universe,
        });
    }

    let invalid = |reason: &str| ModelError::InvalidProduct {
        id: product.id.clone(),
        reason: reason.to_string(),
    };

    if product.sizes.is_empty() {
        return Err(invalid("no sizes listed"));
    }
    if product.colors.is_empty() {
        return Err(invalid("no colors listed"));
    }
    if let Some(size) = product.sizes_off.iter().find(|s| !product.has_size(s)) {
        return Err(invalid(&format!("unavailable size {size:?} is not listed")));
    }
    Ok(())
}
