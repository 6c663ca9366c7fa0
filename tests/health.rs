use axum::extract::State;
use shopmate::{config::AppConfig, routes::health::health_check, state::AppState};

#[tokio::test]
async fn health_check_returns_ok() {
    let state = AppState::from_config(&AppConfig::default());
    let response = health_check(State(state)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.products, 6);
    assert_eq!(data.orders, 2);
}
