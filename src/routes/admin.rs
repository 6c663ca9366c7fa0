use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post, put},
};

use crate::{
    dto::products::{ProductList, ProductView, UpdateStockRequest},
    error::AppResult,
    middleware::auth::AuthSession,
    models::{NewProduct, Product, ProductId},
    response::ApiResponse,
    routes::params::Pagination,
    services::admin_service,
    state::AppState,
    store::InventorySummary,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
        .route("/inventory/low-stock", get(list_low_stock))
        .route("/inventory/summary", get(inventory_summary))
        .route("/inventory/{id}", patch(update_stock))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Add a product (admin only)", body = ApiResponse<ProductView>),
        (status = 400, description = "Invalid product fields"),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(payload): Json<NewProduct>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = admin_service::create_product(&state, &auth, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = Product,
    responses(
        (status = 200, description = "Replace a product (admin only)", body = ApiResponse<ProductView>),
        (status = 400, description = "Invalid product fields"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<ProductId>,
    Json(payload): Json<Product>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = admin_service::update_product(&state, &auth, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Delete a product (admin only)", body = ApiResponse<ProductView>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = admin_service::delete_product(&state, &auth, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/inventory/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Set stock level", body = ApiResponse<ProductView>),
        (status = 400, description = "Negative stock"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_stock(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<ProductId>,
    Json(payload): Json<UpdateStockRequest>,
) -> AppResult<Json<ApiResponse<ProductView>>> {
    let resp = admin_service::update_stock(&state, &auth, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/inventory/low-stock",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Products at or below their threshold", body = ApiResponse<ProductList>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_low_stock(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = admin_service::list_low_stock(&state, &auth, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/inventory/summary",
    responses(
        (status = 200, description = "Inventory totals, per-category stock and top sellers", body = ApiResponse<InventorySummary>),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn inventory_summary(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<ApiResponse<InventorySummary>>> {
    let resp = admin_service::inventory_summary(&state, &auth).await?;
    Ok(Json(resp))
}
