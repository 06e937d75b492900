use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductPatch};

/// Narrow storage port for the product catalog. The service composes over
/// this interface; it never sees the full capability surface of the
/// underlying database client.
///
/// Every read except `find_by_ids` is filtered on `available = true`:
/// bulk validation checks existence, not usability, so soft-deleted
/// records still count there.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn count_available(&self) -> Result<i64, RepositoryError>;
    async fn find_available(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn find_available_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
    async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError>;
    async fn mark_unavailable(&self, id: i64) -> Result<Product, RepositoryError>;
}
