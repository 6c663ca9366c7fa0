use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::ApiResponse,
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub products: usize,
    pub orders: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let store = state.read().await;
    let data = HealthData {
        status: "ok".to_string(),
        products: store.products().len(),
        orders: store.orders().len(),
    };

    Json(ApiResponse::ok("Health check", data))
}
