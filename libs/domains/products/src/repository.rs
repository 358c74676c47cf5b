use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::query::{FilterSpec, ListQuery};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for the catalog.
/// Implementations can use different storage backends (MongoDB, in-memory
/// fakes for tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, assigning id and creation timestamp
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Fetch one page of products matching the query, in query order
    async fn find(&self, query: &ListQuery) -> ProductResult<Vec<Product>>;

    /// Count products matching a filter, ignoring pagination
    async fn count(&self, filter: &FilterSpec) -> ProductResult<u64>;

    /// Merge a partial update onto an existing product; None when absent
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by ID; false when absent
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
