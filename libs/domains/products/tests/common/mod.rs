//! In-memory fake of the product repository
//!
//! Implements the full repository contract over a Vec so service and
//! handler tests can exercise filtering, sorting, and pagination without
//! a MongoDB instance. Natural order is insertion order; sorted queries
//! apply the same id tiebreak the store does.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use domain_products::{
    CreateProduct, FilterSpec, ListQuery, Product, ProductRepository, ProductResult, SortDirection,
    SortField, SortSpec, UpdateProduct,
};

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(filter: &FilterSpec, product: &Product) -> bool {
    if let Some(ref category) = filter.category {
        if &product.category != category {
            return false;
        }
    }
    if let Some(min) = filter.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if product.price > max {
            return false;
        }
    }
    true
}

fn compare(sort: &SortSpec, a: &Product, b: &Product) -> Ordering {
    let ordering = match sort.field {
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Category => a.category.cmp(&b.category),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    let ordering = match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    };
    // same tiebreak as the store's sort document
    ordering.then(a.id.cmp(&b.id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find(&self, query: &ListQuery) -> ProductResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| matches(&query.filter, p))
            .cloned()
            .collect();

        if let Some(ref sort) = query.sort {
            matching.sort_by(|a, b| compare(sort, a, b));
        }

        Ok(matching
            .into_iter()
            .skip(query.page.skip() as usize)
            .take(query.page.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &FilterSpec) -> ProductResult<u64> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().filter(|p| matches(filter, p)).count() as u64)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply_update(input);
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.lock().unwrap();
        match products.iter().position(|p| p.id == id) {
            Some(index) => {
                products.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
