use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post, put},
};

use crate::{
    dto::cart::{
        AddToCartRequest, CartView, QuantityUpdate, SelectLinesRequest, SelectionView,
        UpdateQuantityRequest,
    },
    error::AppResult,
    middleware::auth::AuthSession,
    models::{CartLine, ProductId},
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_view).post(add_to_cart))
        .route(
            "/{product_id}",
            patch(update_quantity).delete(remove_from_cart),
        )
        .route("/selection", put(select_lines))
        .route("/selection/toggle-all", post(toggle_select_all))
        .route("/selection/{product_id}/toggle", post(toggle_line))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines, selection and totals", body = ApiResponse<CartView>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_view(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state, &auth).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or merge a cart line", body = ApiResponse<CartLine>),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartLine>>> {
    let resp = cart_service::add_to_cart(&state, &auth, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Set quantity; zero or less removes the line", body = ApiResponse<QuantityUpdate>),
        (status = 401, description = "Authentication required"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<QuantityUpdate>>> {
    let resp = cart_service::update_quantity(&state, &auth, product_id, payload.quantity).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Remove a cart line; absent lines are ignored", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Authentication required"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::remove_from_cart(&state, &auth, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cart/selection",
    request_body = SelectLinesRequest,
    responses(
        (status = 200, description = "Replace the checkout selection", body = ApiResponse<SelectionView>),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn select_lines(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(payload): Json<SelectLinesRequest>,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    let resp = cart_service::select_lines(&state, &auth, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/selection/toggle-all",
    responses(
        (status = 200, description = "Select all lines, or none when all are selected", body = ApiResponse<SelectionView>),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn toggle_select_all(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    let resp = cart_service::toggle_select_all(&state, &auth).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/selection/{product_id}/toggle",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Flip one line's selection", body = ApiResponse<SelectionView>),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn toggle_line(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<SelectionView>>> {
    let resp = cart_service::toggle_line(&state, &auth, product_id).await?;
    Ok(Json(resp))
}
