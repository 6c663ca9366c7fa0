use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, SignupRequest},
    error::AppResult,
    middleware::auth::AuthSession,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
    store::SessionOverview,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Open a session; admin role for the reserved email", body = ApiResponse<LoginResponse>)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = auth_service::login_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Register a customer and open a session", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Password confirmation does not match")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = auth_service::signup_user(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Close the session and empty the cart", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = auth_service::logout_user(&state, &auth).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session with cart and unread badges", body = ApiResponse<SessionOverview>)
    ),
    tag = "Auth"
)]
pub async fn session(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SessionOverview>>> {
    let resp = auth_service::session_overview(&state).await?;
    Ok(Json(resp))
}
