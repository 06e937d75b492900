use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

/// Single source of "exists and is usable" truth: the lookup is filtered on
/// `available = true`, so a soft-deleted product reports not found here.
pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        match self.repository.find_available_by_id(params.id).await? {
            Some(product) => Ok(product),
            None => Err(ProductError::NotFound(params.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, ProductPatch};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn count_available(&self) -> Result<i64, RepositoryError>;
            async fn find_available(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError>;
            async fn find_available_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
            async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
            async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, RepositoryError>;
            async fn mark_unavailable(&self, id: i64) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_available() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .withf(|id| *id == 7)
            .returning(move |id| {
                Ok(Some(Product::from_repository(
                    id,
                    "Laptop Stand".to_string(),
                    34.5,
                    true,
                    now,
                    now,
                )))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 7 }).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Laptop Stand");
    }

    #[tokio::test]
    async fn should_return_not_found_with_id_when_absent_or_unavailable() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 99 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(99)));
    }
}
