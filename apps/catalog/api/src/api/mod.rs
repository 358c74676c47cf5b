use axum::Router;

pub mod health;

use domain_products::{MongoProductRepository, ProductService, handlers};

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (the products sub-router has its state
/// already applied); only cheap Arc clones happen per request.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = MongoProductRepository::new(&state.db);
    let service = ProductService::new(repository);

    Router::new().nest("/products", handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against MongoDB.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
