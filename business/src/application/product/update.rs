use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Existence-and-availability is checked fully before anything is
        // written; no transaction wraps the two round-trips.
        if self
            .repository
            .find_available_by_id(params.id)
            .await?
            .is_none()
        {
            return Err(ProductError::NotFound(params.id));
        }

        let updated = self.repository.update(params.id, &params.patch).await?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
