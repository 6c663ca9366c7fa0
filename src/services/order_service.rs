use crate::{
    dto::orders::{CheckoutRequest, OrderList},
    error::AppResult,
    middleware::auth::AuthSession,
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    state::AppState,
    store::OrderStats,
};

pub async fn list_orders(
    state: &AppState,
    _auth: &AuthSession,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let orders = state
        .read()
        .await
        .list_orders(query.tab.unwrap_or_default());
    let (items, meta) = query.pagination().apply(orders);
    Ok(ApiResponse::with_meta("Ok", OrderList { items }, meta))
}

pub async fn order_stats(
    state: &AppState,
    _auth: &AuthSession,
) -> AppResult<ApiResponse<OrderStats>> {
    let stats = state.read().await.order_stats();
    Ok(ApiResponse::ok("Ok", stats))
}

pub async fn get_order(
    state: &AppState,
    _auth: &AuthSession,
    id: &str,
) -> AppResult<ApiResponse<Order>> {
    let order = state.read().await.get_order(id)?;
    Ok(ApiResponse::ok("OK", order))
}

pub async fn checkout(
    state: &AppState,
    _auth: &AuthSession,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<Order>> {
    let mut store = state.write().await;
    let order = match payload.product_ids {
        Some(ids) => store.checkout(&ids)?,
        None => store.checkout_selected()?,
    };
    Ok(ApiResponse::ok("주문이 완료되었습니다!", order))
}

pub async fn cancel_order(
    state: &AppState,
    _auth: &AuthSession,
    id: &str,
) -> AppResult<ApiResponse<Order>> {
    let order = state.write().await.cancel_order(id)?;
    Ok(ApiResponse::ok("주문이 취소되었습니다.", order))
}
