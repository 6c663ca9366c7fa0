use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Role, Session},
    state::AppState,
};

/// The signed-in session named by the request's bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session: Session,
}

pub fn ensure_role(auth: &AuthSession, role: Role) -> AppResult<()> {
    if auth.session.role != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_admin(auth: &AuthSession) -> AppResult<()> {
    ensure_role(auth, Role::Admin)
}

fn bearer_token(parts: &axum::http::request::Parts) -> AppResult<Uuid> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::AuthenticationRequired)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::bad_request("Invalid Authorization scheme"))?
        .trim();

    Uuid::parse_str(token).map_err(|_| AppError::AuthenticationRequired)
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let store = state.read().await;
        let session = store.authenticate(&token)?.clone();
        Ok(AuthSession { session })
    }
}
