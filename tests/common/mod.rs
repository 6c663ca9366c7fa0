#![allow(dead_code)]

use shopmate::store::{AdminEmailPolicy, Store};

pub const ADMIN_EMAIL: &str = "admin@shopmate.com";
pub const CUSTOMER_EMAIL: &str = "customer@example.com";
pub const ADDRESS: &str = "서울특별시 강남구 테헤란로 123";

pub fn demo_store() -> Store {
    Store::with_demo_data(AdminEmailPolicy::new(ADMIN_EMAIL), ADDRESS)
}

pub fn empty_store() -> Store {
    Store::new(AdminEmailPolicy::new(ADMIN_EMAIL), ADDRESS)
}

pub fn customer_store() -> Store {
    let mut store = demo_store();
    store.login(CUSTOMER_EMAIL, "pw");
    store
}

pub fn admin_store() -> Store {
    let mut store = demo_store();
    store.login(ADMIN_EMAIL, "pw");
    store
}

pub fn cart_quantities(store: &Store) -> Vec<(i32, i32)> {
    store
        .cart()
        .lines()
        .iter()
        .map(|line| (line.product_id, line.quantity))
        .collect()
}
