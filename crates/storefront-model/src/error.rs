use std::path::PathBuf;

use thiserror::Error;

use crate::{ProductId, Universe};

/// Errors raised while building or loading the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid product id: {0:?}")]
    InvalidProductId(String),

    #[error("unknown universe: {0:?}")]
    UnknownUniverse(String),

    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    #[error("product {0} is listed more than once")]
    DuplicateProduct(ProductId),

    #[error("product {id} is listed under {listed} but declares universe {declared}")]
    UniverseMismatch {
        id: ProductId,
        listed: Universe,
        declared: Universe,
    },

    #[error("product {id} is invalid: {reason}")]
    InvalidProduct { id: ProductId, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
