mod common;

use common::{customer_store, demo_store};
use shopmate::{error::AppError, models::NotificationType, store::NotificationFilter};

#[test]
fn filters_by_read_state_and_type() {
    let store = demo_store();

    assert_eq!(store.list_notifications(NotificationFilter::All).len(), 4);
    let unread: Vec<i32> = store
        .list_notifications(NotificationFilter::Unread)
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(unread, vec![1, 2, 4]);
    let inventory = store.list_notifications(NotificationFilter::Inventory);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].kind, NotificationType::Inventory);
    assert!(store.list_notifications(NotificationFilter::System).is_empty());
}

#[test]
fn mark_read_and_mark_all() {
    let mut store = demo_store();

    assert!(store.mark_notification_read(2).unwrap().read);
    assert_eq!(store.unread_notification_count(), 2);

    assert_eq!(store.mark_all_notifications_read(), 2);
    assert_eq!(store.unread_notification_count(), 0);
    assert_eq!(store.mark_all_notifications_read(), 0);
}

#[test]
fn delete_removes_one_notification() {
    let mut store = demo_store();

    let removed = store.delete_notification(3).unwrap();

    assert_eq!(removed.id, 3);
    let ids: Vec<i32> = store.notifications().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn unknown_ids_are_not_found() {
    let mut store = demo_store();
    assert!(matches!(
        store.mark_notification_read(77),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        store.delete_notification(77),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn new_ids_never_reuse_deleted_ones() {
    let mut store = customer_store();
    store.delete_notification(4).unwrap();
    store.add_to_cart(1, 1).unwrap();

    store.checkout(&[1]).unwrap();

    let ids: Vec<i32> = store.notifications().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![5, 1, 2, 3]);
}
