use thiserror::Error;

use crate::domain::{Kronor, ProductId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid denomination: {0}kr")]
    InvalidDenomination(Kronor),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}
