use crate::{
    dto::products::{ProductList, ProductView, UpdateStockRequest},
    error::{AppError, AppResult},
    middleware::auth::{AuthSession, ensure_admin},
    models::{NewProduct, Product, ProductId},
    response::ApiResponse,
    routes::params::Pagination,
    state::AppState,
    store::InventorySummary,
};

pub async fn create_product(
    state: &AppState,
    auth: &AuthSession,
    payload: NewProduct,
) -> AppResult<ApiResponse<ProductView>> {
    ensure_admin(auth)?;
    let product = state.write().await.add_product(payload)?;
    Ok(ApiResponse::ok("새 상품이 추가되었습니다.", ProductView::from(product)))
}

pub async fn update_product(
    state: &AppState,
    auth: &AuthSession,
    id: ProductId,
    payload: Product,
) -> AppResult<ApiResponse<ProductView>> {
    ensure_admin(auth)?;
    if payload.id != id {
        return Err(AppError::bad_request(format!(
            "body id {} does not match path id {id}",
            payload.id
        )));
    }
    let product = state.write().await.update_product(payload)?;
    Ok(ApiResponse::ok("상품 정보가 업데이트되었습니다.", ProductView::from(product)))
}

pub async fn delete_product(
    state: &AppState,
    auth: &AuthSession,
    id: ProductId,
) -> AppResult<ApiResponse<ProductView>> {
    ensure_admin(auth)?;
    let removed = state.write().await.delete_product(id)?;
    Ok(ApiResponse::ok("상품이 삭제되었습니다.", ProductView::from(removed)))
}

pub async fn update_stock(
    state: &AppState,
    auth: &AuthSession,
    id: ProductId,
    payload: UpdateStockRequest,
) -> AppResult<ApiResponse<ProductView>> {
    ensure_admin(auth)?;
    let product = state.write().await.update_stock(id, payload.stock)?;
    Ok(ApiResponse::ok("재고가 업데이트되었습니다.", ProductView::from(product)))
}

pub async fn list_low_stock(
    state: &AppState,
    auth: &AuthSession,
    pagination: Pagination,
) -> AppResult<ApiResponse<ProductList>> {
    ensure_admin(auth)?;
    let mut products = state.read().await.low_stock_products();
    products.sort_by(|a, b| a.stock.cmp(&b.stock));
    let (items, meta) = pagination.apply(products);
    Ok(ApiResponse::with_meta("Low stock", ProductList::from(items), meta))
}

pub async fn inventory_summary(
    state: &AppState,
    auth: &AuthSession,
) -> AppResult<ApiResponse<InventorySummary>> {
    ensure_admin(auth)?;
    let summary = state.read().await.inventory_summary();
    Ok(ApiResponse::ok("Inventory", summary))
}
