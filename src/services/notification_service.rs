use crate::{
    dto::notifications::{MarkAllRead, NotificationList},
    error::AppResult,
    middleware::auth::AuthSession,
    models::{Notification, NotificationId},
    response::{ApiResponse, Meta},
    routes::params::NotificationQuery,
    state::AppState,
};

pub async fn list_notifications(
    state: &AppState,
    _auth: &AuthSession,
    query: NotificationQuery,
) -> AppResult<ApiResponse<NotificationList>> {
    let store = state.read().await;
    let items = store.list_notifications(query.filter.unwrap_or_default());
    let meta = Meta::whole(items.len());
    let data = NotificationList {
        items,
        unread: store.unread_notification_count(),
    };
    Ok(ApiResponse::with_meta("Notifications", data, meta))
}

pub async fn mark_read(
    state: &AppState,
    _auth: &AuthSession,
    id: NotificationId,
) -> AppResult<ApiResponse<Notification>> {
    let notification = state.write().await.mark_notification_read(id)?;
    Ok(ApiResponse::ok("OK", notification))
}

pub async fn mark_all_read(
    state: &AppState,
    auth: &AuthSession,
) -> AppResult<ApiResponse<MarkAllRead>> {
    let marked = state.write().await.mark_all_notifications_read();
    tracing::debug!(user_id = auth.session.user_id, marked, "notifications cleared");
    Ok(ApiResponse::ok("모든 알림을 읽음으로 표시했습니다.", MarkAllRead { marked }))
}

pub async fn delete_notification(
    state: &AppState,
    _auth: &AuthSession,
    id: NotificationId,
) -> AppResult<ApiResponse<Notification>> {
    let removed = state.write().await.delete_notification(id)?;
    Ok(ApiResponse::ok("알림이 삭제되었습니다.", removed))
}
