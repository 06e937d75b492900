use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ValidateProductsParams {
    pub ids: Vec<i64>,
}

/// Bulk existence check used by other services before accepting a set of
/// product ids (e.g. an order's line items). Availability is deliberately
/// ignored: "exists" and "purchasable" are different questions, and the
/// second is left to callers.
#[async_trait]
pub trait ValidateProductsUseCase: Send + Sync {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError>;
}
