//! Error types for the e-commerce services.
//!
//! Each service has its own error enum; none of them knows about the others' failures.

use super::ProductId;
use thiserror::Error;

/// Errors from the product catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Product already exists: {0}")]
    AlreadyExists(ProductId),
}

/// Errors from order processing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order references a product the catalog does not have.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    #[error("Invalid quantity {quantity} for {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },
}

/// Errors from user account management.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),
}
