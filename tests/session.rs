mod common;

use common::{ADMIN_EMAIL, CUSTOMER_EMAIL, cart_quantities, demo_store};
use shopmate::{
    error::AppError,
    models::Role,
    store::{AdminEmailPolicy, RolePolicy, Store},
};

#[test]
fn role_comes_from_the_reserved_email() {
    let mut store = demo_store();

    let admin = store.login(ADMIN_EMAIL, "anything");
    assert_eq!(admin.session.role, Role::Admin);
    assert_eq!(admin.session.user_id, 1);

    let customer = store.login(CUSTOMER_EMAIL, "");
    assert_eq!(customer.session.role, Role::Customer);
    assert_eq!(customer.session.user_id, 2);
    assert_eq!(store.session().map(|s| s.email.as_str()), Some(CUSTOMER_EMAIL));

    let near_miss = store.login("Admin@shopmate.com", "pw");
    assert_eq!(near_miss.session.role, Role::Customer);
}

#[test]
fn policy_is_injected() {
    let policy = AdminEmailPolicy::new("ops@example.com");
    assert_eq!(policy.role_for("ops@example.com"), Role::Admin);
    assert_eq!(policy.role_for(ADMIN_EMAIL), Role::Customer);

    let mut store = Store::new(policy, "somewhere");
    assert_eq!(store.login("ops@example.com", "pw").session.role, Role::Admin);
}

#[test]
fn logout_discards_the_cart() {
    let mut store = demo_store();
    store.login(CUSTOMER_EMAIL, "pw");
    store.add_to_cart(1, 1).unwrap();
    store.add_to_cart(2, 1).unwrap();
    assert_eq!(store.cart().lines().len(), 2);

    store.logout();
    assert!(store.session().is_none());
    assert!(store.cart().is_empty());

    store.login(CUSTOMER_EMAIL, "pw");
    assert!(store.cart().is_empty());
    assert!(matches!(store.cart().summary().selected_count, 0));
}

#[test]
fn logout_without_session_is_harmless() {
    let mut store = demo_store();
    store.logout();
    assert!(store.session().is_none());
}

#[test]
fn tokens_identify_only_the_current_session() {
    let mut store = demo_store();
    let first = store.login(CUSTOMER_EMAIL, "pw");
    assert_eq!(store.authenticate(&first.token).unwrap().email, CUSTOMER_EMAIL);

    let second = store.login(ADMIN_EMAIL, "pw");
    assert!(matches!(
        store.authenticate(&first.token),
        Err(AppError::AuthenticationRequired)
    ));
    assert!(store.authenticate(&second.token).is_ok());

    store.logout();
    assert!(store.authenticate(&second.token).is_err());
}

#[test]
fn login_keeps_the_cart() {
    let mut store = demo_store();
    store.login(CUSTOMER_EMAIL, "pw");
    store.add_to_cart(6, 2).unwrap();

    store.login(CUSTOMER_EMAIL, "pw");

    assert_eq!(cart_quantities(&store), vec![(6, 2)]);
}

#[test]
fn signup_checks_password_confirmation() {
    let mut store = demo_store();

    let err = store
        .signup("홍길동", "hong@example.com", "secret", "secrets")
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(store.session().is_none());

    let signed_in = store
        .signup("홍길동", "hong@example.com", "secret", "secret")
        .unwrap();
    assert_eq!(signed_in.session.user_id, 3);
    assert_eq!(signed_in.session.name, "홍길동");
    assert_eq!(signed_in.session.role, Role::Customer);
}

#[test]
fn overview_reports_badges() {
    let mut store = demo_store();
    let overview = store.session_overview();
    assert!(overview.session.is_none());
    assert_eq!(overview.cart_item_count, 0);
    assert_eq!(overview.unread_notifications, 3);

    store.login(CUSTOMER_EMAIL, "pw");
    store.add_to_cart(1, 4).unwrap();
    let overview = store.session_overview();
    assert_eq!(overview.session.map(|s| s.role), Some(Role::Customer));
    assert_eq!(overview.cart_item_count, 4);
}
