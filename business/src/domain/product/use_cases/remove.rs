use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct RemoveProductParams {
    pub id: i64,
}

/// Soft delete: marks the product unavailable and returns the updated
/// record. There is no operation that reverses it.
#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError>;
}
