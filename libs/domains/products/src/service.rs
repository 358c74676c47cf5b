//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductPage, UpdateProduct};
use crate::query::ListQuery;
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, not-found policy, and orchestrates
/// repository operations. Validation always runs before any mutating
/// repository call.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.insert(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List one page of products with pagination metadata
    ///
    /// The page fetch and the total count run against the same filter; the
    /// count ignores pagination so `totalPages` reflects the whole result
    /// set. A page past the end of the data is an empty page, not an error.
    #[instrument(skip(self, query))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductPage> {
        let items = self.repository.find(&query).await?;
        let total_items = self.repository.count(&query.filter).await?;

        let limit = query.page.limit;
        let total_pages = total_items.div_ceil(u64::from(limit)) as u32;

        Ok(ProductPage {
            items,
            page: query.page.page,
            limit,
            total_items,
            total_pages,
        })
    }

    /// Update an existing product with a partial field merge
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        // Re-check the entity invariants on the merged record before
        // anything is written; the merge itself cannot empty a required
        // field, but this keeps the post-merge state authoritative.
        let mut merged = existing;
        merged.apply_update(input.clone());
        merged
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
