use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{Notification, NotificationId, NotificationType, Priority},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Order,
    Shipping,
    Promotion,
    Inventory,
    System,
}

impl NotificationFilter {
    pub fn matches(self, notification: &Notification) -> bool {
        let kind = match self {
            NotificationFilter::All => return true,
            NotificationFilter::Unread => return !notification.read,
            NotificationFilter::Order => NotificationType::Order,
            NotificationFilter::Shipping => NotificationType::Shipping,
            NotificationFilter::Promotion => NotificationType::Promotion,
            NotificationFilter::Inventory => NotificationType::Inventory,
            NotificationFilter::System => NotificationType::System,
        };
        notification.kind == kind
    }
}

impl Store {
    pub fn list_notifications(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_notification_read(&mut self, id: NotificationId) -> AppResult<Notification> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("notification {id}")))?;
        notification.read = true;
        tracing::debug!(notification_id = id, "notification read");
        Ok(notification.clone())
    }

    /// Returns how many notifications flipped from unread.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            flipped += 1;
        }
        tracing::info!(flipped, "all notifications read");
        flipped
    }

    pub fn delete_notification(&mut self, id: NotificationId) -> AppResult<Notification> {
        let index = self
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("notification {id}")))?;
        let removed = self.notifications.remove(index);
        tracing::info!(notification_id = id, "notification deleted");
        Ok(removed)
    }

    pub(super) fn push_notification(
        &mut self,
        kind: NotificationType,
        title: &str,
        message: String,
        priority: Priority,
        timestamp: DateTime<Utc>,
    ) -> NotificationId {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.insert(
            0,
            Notification {
                id,
                kind,
                title: title.to_string(),
                message,
                timestamp,
                read: false,
                priority,
            },
        );
        id
    }
}
