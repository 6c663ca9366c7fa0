use crate::{
    dto::cart::{AddToCartRequest, CartView, QuantityUpdate, SelectLinesRequest, SelectionView},
    error::AppResult,
    middleware::auth::AuthSession,
    models::{CartLine, ProductId},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn view_cart(state: &AppState, _auth: &AuthSession) -> AppResult<ApiResponse<CartView>> {
    let store = state.read().await;
    let view = CartView::from(store.cart());
    let meta = Meta::whole(view.items.len());
    Ok(ApiResponse::with_meta("OK", view, meta))
}

pub async fn add_to_cart(
    state: &AppState,
    auth: &AuthSession,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartLine>> {
    let options = payload.options();
    let line = state
        .write()
        .await
        .add_to_cart_with(payload.product_id, payload.quantity, options)?;
    tracing::debug!(user_id = auth.session.user_id, product_id = line.product_id, "cart add");

    Ok(ApiResponse::ok(format!("{}이(가) 장바구니에 추가되었습니다.", line.name), line))
}

pub async fn update_quantity(
    state: &AppState,
    _auth: &AuthSession,
    product_id: ProductId,
    quantity: i32,
) -> AppResult<ApiResponse<QuantityUpdate>> {
    let mut store = state.write().await;
    let line = store.update_quantity(product_id, quantity)?;
    let summary = store.cart().summary();
    Ok(ApiResponse::ok("OK", QuantityUpdate { line, summary }))
}

pub async fn remove_from_cart(
    state: &AppState,
    _auth: &AuthSession,
    product_id: ProductId,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let removed = state.write().await.remove_from_cart(product_id)?;
    Ok(ApiResponse::ok(
        "상품이 장바구니에서 제거되었습니다.",
        serde_json::json!({ "product_id": product_id, "removed": removed }),
    ))
}

pub async fn select_lines(
    state: &AppState,
    _auth: &AuthSession,
    payload: SelectLinesRequest,
) -> AppResult<ApiResponse<SelectionView>> {
    let mut store = state.write().await;
    let selected = store.select_lines(&payload.product_ids)?;
    let summary = store.cart().summary();
    Ok(ApiResponse::ok("Selection updated", SelectionView { selected, summary }))
}

pub async fn toggle_line(
    state: &AppState,
    _auth: &AuthSession,
    product_id: ProductId,
) -> AppResult<ApiResponse<SelectionView>> {
    let mut store = state.write().await;
    store.toggle_line(product_id)?;
    let view = SelectionView {
        selected: store.cart().selected_ids(),
        summary: store.cart().summary(),
    };
    Ok(ApiResponse::ok("Selection updated", view))
}

pub async fn toggle_select_all(
    state: &AppState,
    _auth: &AuthSession,
) -> AppResult<ApiResponse<SelectionView>> {
    let mut store = state.write().await;
    let selected = store.toggle_select_all()?;
    let summary = store.cart().summary();
    Ok(ApiResponse::ok("Selection updated", SelectionView { selected, summary }))
}
