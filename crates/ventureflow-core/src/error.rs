use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("No category selected")]
    NoCategorySelected,
    #[error("No subcategory selected")]
    NoSubcategorySelected,
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Subcategory not found: {0}")]
    SubcategoryNotFound(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
