use crate::{
    dto::auth::{LoginRequest, LoginResponse, SignupRequest},
    error::AppResult,
    middleware::auth::AuthSession,
    response::ApiResponse,
    state::AppState,
    store::SessionOverview,
};

pub async fn login_user(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let signed_in = state.write().await.login(&email, &password);
    let greeting = format!("안녕하세요, {}님!", signed_in.session.name);

    Ok(ApiResponse::ok(greeting, LoginResponse::from(signed_in)))
}

pub async fn signup_user(
    state: &AppState,
    payload: SignupRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let SignupRequest {
        name,
        email,
        password,
        confirm_password,
    } = payload;
    let signed_in = state
        .write()
        .await
        .signup(&name, &email, &password, &confirm_password)?;

    Ok(ApiResponse::ok("User created", LoginResponse::from(signed_in)))
}

pub async fn logout_user(
    state: &AppState,
    _auth: &AuthSession,
) -> AppResult<ApiResponse<serde_json::Value>> {
    state.write().await.logout();
    Ok(ApiResponse::ok("로그아웃되었습니다.", serde_json::json!({})))
}

pub async fn session_overview(state: &AppState) -> AppResult<ApiResponse<SessionOverview>> {
    let overview = state.read().await.session_overview();
    Ok(ApiResponse::ok("Session", overview))
}
