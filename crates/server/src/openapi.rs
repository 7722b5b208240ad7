use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub id: i32,
    pub customer_name: String,
    pub quantity: i32,
    pub product_id: i32,
}

#[derive(ToSchema)]
pub struct OrderInputDoc {
    pub customer_name: String,
    pub quantity: i32,
    pub product_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products & Orders API",
        version = "1.0.0",
        description = "A simple CRUD API for managing products and orders"
    ),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::products::list_orders,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::create,
        crate::routes::orders::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            ErrorDoc,
            ProductDoc,
            ProductInputDoc,
            OrderDoc,
            OrderInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
