use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};

pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Removing product: {}", params.id));

        // Same availability-filtered check as a plain lookup, so removing
        // an already-removed product reports not found.
        if self
            .repository
            .find_available_by_id(params.id)
            .await?
            .is_none()
        {
            return Err(ProductError::NotFound(params.id));
        }

        let removed = self.repository.mark_unavailable(params.id).await?;

        self.logger
            .info(&format!("Product removed: {}", removed.id));
        Ok(removed)
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
    async fn should_return_unavailable_record_after_soft_delete() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_available_by_id().returning(move |id| {
            Ok(Some(Product::from_repository(
                id,
                "Monitor Arm".to_string(),
                79.0,
                true,
                now,
                now,
            )))
        });
        mock_repo.expect_mark_unavailable().returning(move |id| {
            Ok(Product::from_repository(
                id,
                "Monitor Arm".to_string(),
                79.0,
                false,
                now,
                Utc::now(),
            ))
        });

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveProductParams { id: 11 }).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, 11);
        assert!(!product.available);
    }

    #[tokio::test]
    async fn should_return_not_found_without_writing_when_already_removed() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Ok(None));
        mock_repo.expect_mark_unavailable().never();

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveProductParams { id: 11 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(11)));
    }
}
