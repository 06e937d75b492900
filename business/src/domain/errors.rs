/// Repository errors for the domain layer.
/// Storage failures surface untranslated: the core never retries, masks,
/// or logs them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
}
