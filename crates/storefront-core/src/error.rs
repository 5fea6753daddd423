//! Store error types.
//!
//! Nothing in the storefront core is fatal. Every operation that cannot be
//! applied returns a [`StoreError`] *before* mutating any state; the
//! [`Storefront`](crate::Storefront) logs it and leaves the session untouched.

use storefront_model::{ProductId, Universe};
use thiserror::Error;

use crate::state::LineKey;

/// Reasons a user action was not applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    // =========================================================================
    // UNRESOLVED REFERENCES
    // =========================================================================
    /// Product id not present in the catalog (stale link, removed product).
    #[error("product not found: {id}")]
    ProductNotFound {
        /// Id that could not be resolved.
        id: ProductId,
    },

    // =========================================================================
    // INVALID SELECTIONS
    // =========================================================================
    /// Size is not listed for the product.
    #[error("size {size:?} is not offered for {product}")]
    SizeUnknown { product: ProductId, size: String },

    /// Size is listed but currently unavailable.
    #[error("size {size:?} of {product} is unavailable")]
    SizeUnavailable { product: ProductId, size: String },

    /// Color is not listed for the product.
    #[error("color {color:?} is not offered for {product}")]
    ColorUnknown { product: ProductId, color: String },

    /// Product has no sizes or no colors to pre-select.
    #[error("product {product} has no sizes or colors to select")]
    NoVariants { product: ProductId },

    // =========================================================================
    // CALLER-CONTRACT VIOLATIONS
    // =========================================================================
    /// Detail action issued while no detail session is open.
    #[error("no product detail is open")]
    NoDetailSession,

    /// Detail requested for a product whose universe page is not the
    /// current, settled page.
    #[error("detail of {product} requested away from the {universe} page")]
    DetailOffPage {
        product: ProductId,
        universe: Universe,
    },

    /// Gallery image index past the last thumbnail.
    #[error("gallery image {index} out of range (len {len})")]
    ImageOutOfRange { index: usize, len: usize },

    /// Cart line index past the end of the ledger.
    #[error("cart line {index} out of range (len {len})")]
    LineIndexOutOfRange { index: usize, len: usize },

    /// No cart line with the given key.
    #[error("no cart line for {key:?}")]
    LineNotFound { key: LineKey },

    /// Checkout requested with an empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

impl StoreError {
    /// Get the error category for logging and display purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProductNotFound { .. } => ErrorCategory::UnresolvedReference,

            Self::SizeUnknown { .. }
            | Self::SizeUnavailable { .. }
            | Self::ColorUnknown { .. }
            | Self::NoVariants { .. } => ErrorCategory::InvalidSelection,

            Self::NoDetailSession
            | Self::DetailOffPage { .. }
            | Self::ImageOutOfRange { .. }
            | Self::LineIndexOutOfRange { .. }
            | Self::LineNotFound { .. }
            | Self::EmptyCart => ErrorCategory::ContractViolation,
        }
    }

    /// True for actions the rendered surfaces should never have issued.
    pub fn is_contract_violation(&self) -> bool {
        self.category() == ErrorCategory::ContractViolation
    }
}

/// Error category for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A product id that does not resolve.
    UnresolvedReference,
    /// A size or color the product does not offer.
    InvalidSelection,
    /// An action that is meaningless in the current state.
    ContractViolation,
}

impl ErrorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnresolvedReference => "Unresolved reference",
            Self::InvalidSelection => "Invalid selection",
            Self::ContractViolation => "Contract violation",
        }
    }
}
