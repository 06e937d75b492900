#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product with id {0} not found")]
    NotFound(i64),
    #[error("Some products were not found")]
    SomeNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
