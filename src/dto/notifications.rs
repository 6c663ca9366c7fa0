use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Notification;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationList {
    pub items: Vec<Notification>,
    pub unread: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkAllRead {
    pub marked: usize,
}
