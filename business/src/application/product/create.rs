use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        // The datastore assigns the id and defaults `available` to true.
        // Field constraints are its concern too; violations surface as
        // repository errors, untranslated.
        let new_product = NewProduct {
            name: params.name,
            price: params.price,
        };
        let product = self.repository.insert(&new_product).await?;

        self.logger.info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
