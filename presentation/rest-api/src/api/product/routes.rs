use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::product::model::ProductPatch;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::validate::{
    ValidateProductsParams, ValidateProductsUseCase,
};
use business::domain::shared::pagination::Pagination;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductListResponse, ProductResponse, UpdateProductRequest,
    ValidateProductsRequest,
};
use crate::api::tags::ApiTags;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    remove_use_case: Arc<dyn RemoveProductUseCase>,
    validate_use_case: Arc<dyn ValidateProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        remove_use_case: Arc<dyn RemoveProductUseCase>,
        validate_use_case: Arc<dyn ValidateProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            remove_use_case,
            validate_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for creating, listing, updating, soft-deleting, and bulk
/// validating catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Persists a new product; the id is assigned by the datastore and the
    /// product starts available.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// List available products, paginated
    ///
    /// Soft-deleted products are excluded. `page` defaults to 1, `limit`
    /// to 10; non-positive values are rejected. A page past the end
    /// answers with empty data and a message instead of pagination
    /// metadata.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        page: Query<Option<i64>>,
        limit: Query<Option<i64>>,
    ) -> ListProductsResponse {
        let pagination = match Pagination::new(
            page.0.unwrap_or(DEFAULT_PAGE),
            limit.0.unwrap_or(DEFAULT_LIMIT),
        ) {
            Ok(pagination) => pagination,
            Err(err) => {
                return ListProductsResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: err.to_string(),
                }));
            }
        };

        match self
            .list_use_case
            .execute(ListProductsParams { pagination })
            .await
        {
            Ok(product_page) => ListProductsResponse::Ok(Json(product_page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id
    ///
    /// Returns the product only while it is available; a soft-deleted
    /// product reports not found.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Applies a partial update to an available product; absent fields are
    /// left unchanged.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let params = UpdateProductParams {
            id: id.0,
            patch: ProductPatch {
                name: body.0.name,
                price: body.0.price,
            },
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product (soft delete)
    ///
    /// Marks the product unavailable and returns the updated record. The
    /// record is retained and keeps validating in bulk existence checks,
    /// but disappears from listings and lookups. Irreversible.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn remove_product(&self, id: Path<i64>) -> RemoveProductResponse {
        match self
            .remove_use_case
            .execute(RemoveProductParams { id: id.0 })
            .await
        {
            Ok(product) => RemoveProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Validate a batch of product ids
    ///
    /// Confirms every distinct id corresponds to a persisted record,
    /// regardless of availability. Fails as a whole when any id is
    /// missing.
    #[oai(
        path = "/products/validate",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn validate_products(
        &self,
        body: Json<ValidateProductsRequest>,
    ) -> ValidateProductsResponse {
        match self
            .validate_use_case
            .execute(ValidateProductsParams { ids: body.0.ids })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ValidateProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ValidateProductsResponse::BadRequest(json),
                    _ => ValidateProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ValidateProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
