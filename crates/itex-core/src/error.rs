use itex_domain::{CategoryId, TransactionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
    #[error("Category `{0}` already exists")]
    DuplicateCategory(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Export failed: {0}")]
    Export(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
