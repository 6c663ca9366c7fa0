use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, patch, post},
};

use crate::{
    dto::notifications::{MarkAllRead, NotificationList},
    error::AppResult,
    middleware::auth::AuthSession,
    models::{Notification, NotificationId},
    response::ApiResponse,
    routes::params::NotificationQuery,
    services::notification_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/read-all", post(mark_all_read))
        .route("/{id}/read", patch(mark_read))
        .route("/{id}", delete(delete_notification))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    params(NotificationQuery),
    responses(
        (status = 200, description = "Notifications, newest first", body = ApiResponse<NotificationList>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthSession,
    Query(query): Query<NotificationQuery>,
) -> AppResult<Json<ApiResponse<NotificationList>>> {
    let resp = notification_service::list_notifications(&state, &auth, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Mark one notification read", body = ApiResponse<Notification>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<NotificationId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let resp = notification_service::mark_read(&state, &auth, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read-all",
    responses(
        (status = 200, description = "Mark every notification read", body = ApiResponse<MarkAllRead>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthSession,
) -> AppResult<Json<ApiResponse<MarkAllRead>>> {
    let resp = notification_service::mark_all_read(&state, &auth).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Delete a notification", body = ApiResponse<Notification>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<NotificationId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let resp = notification_service::delete_notification(&state, &auth, id).await?;
    Ok(Json(resp))
}
