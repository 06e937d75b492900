use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase, ProductPage};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError> {
        let pagination = params.pagination;
        self.logger.info(&format!(
            "Listing available products, page {} limit {}",
            pagination.page(),
            pagination.limit()
        ));

        let total_registers = self.repository.count_available().await?;
        let last_page = pagination.last_page(total_registers);

        // An empty table has last_page = 0, so any page lands here.
        if pagination.page() > last_page {
            return Ok(ProductPage::PastEnd);
        }

        let products = self
            .repository
            .find_available(pagination.offset(), pagination.limit())
            .await?;

        Ok(ProductPage::Page {
            products,
            total_registers,
            current_page: pagination.page(),
            last_page,
        })
    }
}
