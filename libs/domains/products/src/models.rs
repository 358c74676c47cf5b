use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - represents a catalog item stored in MongoDB
///
/// Field names follow the JSON wire format of the API (camelCase); the
/// identifier is stored as `_id` in MongoDB.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Product name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Product description
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    /// Unit price
    #[validate(range(exclusive_min = 0.01, message = "price must be greater than 0.01"))]
    pub price: f64,
    /// Product category
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    /// Whether the product is currently in stock
    pub in_stock: bool,
    /// Tags for search and organization
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp, assigned once at creation
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.01, message = "price must be greater than 0.01"))]
    pub price: f64,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating an existing product
///
/// Every field is optional; only the fields present in the request are
/// merged onto the stored record.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.01, message = "price must be greater than 0.01"))]
    pub price: Option<f64>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// One page of listing results with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Records on this page, in query order
    pub items: Vec<Product>,
    /// 1-based page number that was served
    pub page: u32,
    /// Page size that was applied
    pub limit: u32,
    /// Total number of records matching the filter
    pub total_items: u64,
    /// Total number of pages for the filter at this page size
    pub total_pages: u32,
}

/// Confirmation body returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            tags: input.tags,
            created_at: Utc::now(),
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
    }
}
