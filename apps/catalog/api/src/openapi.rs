use utoipa::OpenApi;

/// Aggregated API documentation for the catalog service.
///
/// Domain crates own their endpoint documentation; this nests them under
/// the paths the router actually serves.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Product catalog service with filtered, sorted, paginated listing"
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
