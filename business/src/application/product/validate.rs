use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::validate::{ValidateProductsParams, ValidateProductsUseCase};

pub struct ValidateProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ValidateProductsUseCase for ValidateProductsUseCaseImpl {
    async fn execute(&self, params: ValidateProductsParams) -> Result<Vec<Product>, ProductError> {
        // Duplicates collapse; caller order and multiplicity carry no meaning.
        let mut unique: Vec<i64> = params
            .ids
            .into_iter()
            .collect::<HashSet<i64>>()
            .into_iter()
            .collect();
        unique.sort_unstable();

        self.logger
            .info(&format!("Validating {} product ids", unique.len()));

        // No availability filter here: a soft-deleted product still exists.
        let products = self.repository.find_by_ids(&unique).await?;

        if products.len() != unique.len() {
            return Err(ProductError::SomeNotFound);
        }

        Ok(products)
    }
}
