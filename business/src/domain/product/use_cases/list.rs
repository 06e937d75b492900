use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::Pagination;

pub struct ListProductsParams {
    pub pagination: Pagination,
}

/// Result of a paginated listing. A request past the last page is not an
/// error: it yields `PastEnd`, which the transport renders as an empty data
/// set with a message and no pagination metadata.
#[derive(Debug)]
pub enum ProductPage {
    Page {
        products: Vec<Product>,
        total_registers: i64,
        current_page: i64,
        last_page: i64,
    },
    PastEnd,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
