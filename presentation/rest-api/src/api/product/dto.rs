use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::list::ProductPage;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
}

/// Partial update: absent fields are left unchanged. There is deliberately
/// no `id` and no `available` field, so the body can never override the
/// path id or resurrect a removed product.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New product price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ValidateProductsRequest {
    /// Product ids to check for existence; duplicates are tolerated
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// False once the product has been removed (soft delete)
    pub available: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            available: product.available,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Paginated listing body. A request past the last page answers with an
/// empty `data`, a message, and no pagination metadata; an in-range request
/// carries the metadata and no message. The two shapes are intentional.
#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    /// Page of available products
    pub data: Vec<ProductResponse>,
    /// Total count of available products
    #[oai(rename = "totalRegisters", skip_serializing_if_is_none)]
    pub total_registers: Option<i64>,
    /// The requested page
    #[oai(rename = "currentPage", skip_serializing_if_is_none)]
    pub current_page: Option<i64>,
    /// Number of the last non-empty page
    #[oai(rename = "lastPage", skip_serializing_if_is_none)]
    pub last_page: Option<i64>,
    /// Explanation when the requested page is past the end
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        match page {
            ProductPage::Page {
                products,
                total_registers,
                current_page,
                last_page,
            } => Self {
                data: products.into_iter().map(|p| p.into()).collect(),
                total_registers: Some(total_registers),
                current_page: Some(current_page),
                last_page: Some(last_page),
                message: None,
            },
            ProductPage::PastEnd => Self {
                data: vec![],
                total_registers: None,
                current_page: None,
                last_page: None,
                message: Some("No more records".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_product(id: i64) -> Product {
        let now = Utc::now();
        Product::from_repository(id, format!("Product {id}"), 15.0, true, now, now)
    }

    #[test]
    fn should_omit_metadata_and_carry_message_for_past_end_page() {
        // Arrange
        let page = ProductPage::PastEnd;

        // Act
        let response = ProductListResponse::from(page);

        // Assert
        assert!(response.data.is_empty());
        assert_eq!(response.message.as_deref(), Some("No more records"));
        assert!(response.total_registers.is_none());
        assert!(response.current_page.is_none());
        assert!(response.last_page.is_none());
    }

    #[test]
    fn should_carry_metadata_and_no_message_for_in_range_page() {
        // Arrange
        let page = ProductPage::Page {
            products: vec![make_product(1), make_product(2)],
            total_registers: 5,
            current_page: 1,
            last_page: 3,
        };

        // Act
        let response = ProductListResponse::from(page);

        // Assert
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].id, 1);
        assert_eq!(response.total_registers, Some(5));
        assert_eq!(response.current_page, Some(1));
        assert_eq!(response.last_page, Some(3));
        assert!(response.message.is_none());
    }
}
