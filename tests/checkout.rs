mod common;

use chrono::{Datelike, Utc};
use common::{ADDRESS, cart_quantities, customer_store, demo_store};
use shopmate::{
    error::AppError,
    models::{NotificationType, OrderStatus},
    store::OrderTab,
};

#[test]
fn checkout_moves_selected_lines_into_a_pending_order() {
    let mut store = customer_store();
    store.add_to_cart(1, 2).unwrap();
    store.add_to_cart(2, 1).unwrap();
    store.add_to_cart(6, 3).unwrap();
    let stock_before: Vec<i32> = store.products().iter().map(|p| p.stock).collect();

    let order = store.checkout(&[1, 6]).unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.id, format!("ORD-{}-003", Utc::now().year()));
    assert_eq!(order.date, Utc::now().date_naive());
    assert_eq!(order.shipping_address, ADDRESS);
    assert_eq!(order.tracking_number, None);
    let ids: Vec<i32> = order.items.iter().map(|item| item.product_id).collect();
    assert_eq!(ids, vec![1, 6]);
    assert_eq!(order.total_amount, 19_900 * 2 + 120_000 * 3);

    assert_eq!(cart_quantities(&store), vec![(2, 1)]);
    assert_eq!(store.orders()[0], order);
    assert_eq!(store.orders().len(), 3);

    let stock_after: Vec<i32> = store.products().iter().map(|p| p.stock).collect();
    assert_eq!(stock_before, stock_after);
}

#[test]
fn checkout_posts_an_order_notification_first() {
    let mut store = customer_store();
    store.add_to_cart(4, 1).unwrap();

    let order = store.checkout(&[4]).unwrap();

    let latest = &store.notifications()[0];
    assert_eq!(latest.id, 5);
    assert_eq!(latest.kind, NotificationType::Order);
    assert!(!latest.read);
    assert!(latest.message.contains(&order.id));
    assert_eq!(store.notifications().len(), 5);
}

#[test]
fn total_is_items_plus_delivery_rule() {
    let cases = [(1, 1), (1, 2), (1, 3), (6, 1), (3, 1)];
    for (product_id, quantity) in cases {
        let mut store = customer_store();
        store.add_to_cart(product_id, quantity).unwrap();

        let order = store.checkout(&[product_id]).unwrap();

        let sum = order.items_subtotal();
        let fee = if sum >= 50_000 { 0 } else { 3_000 };
        assert_eq!(order.total_amount, sum + fee, "product {product_id} x{quantity}");
    }
}

#[test]
fn two_tee_shirts_pay_the_delivery_fee() {
    let mut store = customer_store();
    store.add_to_cart(1, 2).unwrap();

    let order = store.checkout_selected().unwrap();

    assert_eq!(order.total_amount, 42_800);
}

#[test]
fn checkout_removes_exactly_the_selected_count() {
    let mut store = customer_store();
    for id in 1..=6 {
        store.add_to_cart(id, 1).unwrap();
    }
    let before = store.cart().lines().len();

    store.checkout(&[2, 4, 5]).unwrap();

    assert_eq!(store.cart().lines().len(), before - 3);
    assert_eq!(
        cart_quantities(&store),
        vec![(1, 1), (3, 1), (6, 1)]
    );
}

#[test]
fn empty_selection_is_rejected() {
    let mut store = customer_store();
    store.add_to_cart(1, 1).unwrap();
    store.select_lines(&[]).unwrap();

    assert!(matches!(store.checkout(&[]), Err(AppError::BadRequest(_))));
    assert!(matches!(store.checkout_selected(), Err(AppError::BadRequest(_))));
    assert_eq!(store.orders().len(), 2);
    assert_eq!(cart_quantities(&store), vec![(1, 1)]);
}

#[test]
fn lines_outside_the_cart_reject_the_whole_checkout() {
    let mut store = customer_store();
    store.add_to_cart(1, 1).unwrap();

    let err = store.checkout(&[1, 2]).unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(cart_quantities(&store), vec![(1, 1)]);
    assert_eq!(store.orders().len(), 2);
    assert_eq!(store.notifications().len(), 4);
}

#[test]
fn checkout_requires_a_session() {
    let mut store = demo_store();
    assert!(matches!(
        store.checkout(&[1]),
        Err(AppError::AuthenticationRequired)
    ));
}

#[test]
fn order_items_survive_catalog_changes() {
    let mut store = customer_store();
    store.add_to_cart(3, 1).unwrap();
    let order = store.checkout(&[3]).unwrap();

    store.logout();
    store.login(common::ADMIN_EMAIL, "pw");
    store.delete_product(3).unwrap();

    let kept = store.get_order(&order.id).unwrap();
    assert_eq!(kept.items, order.items);
    assert_eq!(kept.items[0].name, "아이폰 15 Pro");
}

#[test]
fn stale_cart_line_still_checks_out_from_snapshot() {
    let mut store = common::admin_store();
    store.add_to_cart(5, 1).unwrap();
    store.delete_product(5).unwrap();

    assert_eq!(cart_quantities(&store), vec![(5, 1)]);
    let order = store.checkout(&[5]).unwrap();
    assert_eq!(order.items[0].price, 89_000);
    assert_eq!(order.total_amount, 89_000);
}

#[test]
fn order_ids_keep_counting_up() {
    let mut store = customer_store();
    let year = Utc::now().year();
    for expected in 3..6 {
        store.add_to_cart(1, 1).unwrap();
        let order = store.checkout(&[1]).unwrap();
        assert_eq!(order.id, format!("ORD-{year}-{expected:03}"));
    }
}

#[test]
fn cancel_pending_order() {
    let mut store = customer_store();
    store.add_to_cart(1, 1).unwrap();
    let order = store.checkout(&[1]).unwrap();

    let cancelled = store.cancel_order(&order.id).unwrap();

    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(store.get_order(&order.id).unwrap().status, OrderStatus::Cancelled);
}

#[test]
fn cancel_rejects_non_pending_orders_unchanged() {
    let mut store = customer_store();

    let err = store.cancel_order("ORD-2024-001").unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(
        store.get_order("ORD-2024-001").unwrap().status,
        OrderStatus::Delivered
    );

    store.add_to_cart(1, 1).unwrap();
    let order = store.checkout(&[1]).unwrap();
    store.cancel_order(&order.id).unwrap();
    assert!(matches!(
        store.cancel_order(&order.id),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn cancel_unknown_order_is_not_found() {
    let mut store = customer_store();
    assert!(matches!(
        store.cancel_order("ORD-1999-999"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn order_tabs_and_stats() {
    let mut store = customer_store();
    store.add_to_cart(1, 1).unwrap();
    let placed = store.checkout(&[1]).unwrap();
    store.add_to_cart(2, 1).unwrap();
    let cancelled = store.checkout(&[2]).unwrap();
    store.cancel_order(&cancelled.id).unwrap();

    let active: Vec<String> = store
        .list_orders(OrderTab::Active)
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, vec![placed.id.clone(), "ORD-2024-002".to_string()]);
    assert_eq!(store.list_orders(OrderTab::Cancelled).len(), 1);
    assert_eq!(store.list_orders(OrderTab::All).len(), 4);

    let stats = store.order_stats();
    assert_eq!(stats.all, 4);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.delivered, 1);
    assert_eq!(stats.cancelled, 1);
}
