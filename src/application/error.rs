use thiserror::Error;

use crate::domain::CategoryId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("No category with id {0}")]
    InvalidCategory(CategoryId),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Storage unavailable: {0}")]
    Storage(#[from] anyhow::Error),
}
