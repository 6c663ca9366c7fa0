mod common;

use common::{admin_store, customer_store, demo_store, empty_store};
use shopmate::{
    error::AppError,
    models::{Category, NewProduct, ProductStatus, StockStatus},
    store::{CatalogFilter, MAX_PRICE, ProductSort},
};

fn hoodie() -> NewProduct {
    NewProduct {
        name: "오버핏 후디".to_string(),
        brand: "MUSINSA".to_string(),
        price: 49_000,
        original_price: Some(69_000),
        image: String::new(),
        category: Category::Clothing,
        stock: 30,
        low_stock_threshold: 5,
        status: ProductStatus::Active,
        description: Some("기모 후디".to_string()),
        features: vec!["기모".to_string()],
    }
}

#[test]
fn add_product_takes_next_id_and_zeroed_sales() {
    let mut store = admin_store();

    let product = store.add_product(hoodie()).unwrap();

    assert_eq!(product.id, 7);
    assert_eq!(product.sold_count, 0);
    assert_eq!(product.reviews, 0);
    assert_eq!(product.rating, 0.0);
    assert_eq!(store.products().len(), 7);
}

#[test]
fn add_product_to_empty_catalog_starts_at_one() {
    let mut store = empty_store();
    store.login(common::ADMIN_EMAIL, "pw");

    assert_eq!(store.add_product(hoodie()).unwrap().id, 1);
    assert_eq!(store.add_product(hoodie()).unwrap().id, 2);
}

#[test]
fn add_product_follows_max_id_after_deletes() {
    let mut store = admin_store();
    store.delete_product(3).unwrap();

    assert_eq!(store.add_product(hoodie()).unwrap().id, 7);
}

#[test]
fn catalog_mutations_are_admin_only() {
    let mut store = customer_store();
    let before = store.products().to_vec();

    assert!(matches!(store.add_product(hoodie()), Err(AppError::Forbidden)));
    assert!(matches!(store.delete_product(1), Err(AppError::Forbidden)));
    assert!(matches!(store.update_stock(1, 3), Err(AppError::Forbidden)));
    let mut edited = before[0].clone();
    edited.price = 1;
    assert!(matches!(store.update_product(edited), Err(AppError::Forbidden)));
    assert_eq!(store.products(), before.as_slice());

    let mut anonymous = demo_store();
    assert!(matches!(
        anonymous.add_product(hoodie()),
        Err(AppError::AuthenticationRequired)
    ));
}

#[test]
fn add_product_validates_fields() {
    let mut store = admin_store();

    let mut free = hoodie();
    free.price = 0;
    assert!(matches!(store.add_product(free), Err(AppError::BadRequest(_))));

    let mut markup = hoodie();
    markup.original_price = Some(10_000);
    assert!(matches!(store.add_product(markup), Err(AppError::BadRequest(_))));

    let mut negative = hoodie();
    negative.stock = -1;
    assert!(matches!(store.add_product(negative), Err(AppError::BadRequest(_))));

    assert_eq!(store.products().len(), 6);
}

#[test]
fn prices_above_ceiling_are_rejected() {
    let mut store = admin_store();

    let mut pricey = hoodie();
    pricey.price = i64::MAX;
    pricey.original_price = None;
    assert!(matches!(store.add_product(pricey), Err(AppError::BadRequest(_))));

    let mut inflated = hoodie();
    inflated.original_price = Some(MAX_PRICE + 1);
    assert!(matches!(store.add_product(inflated), Err(AppError::BadRequest(_))));

    let mut top = hoodie();
    top.price = MAX_PRICE;
    top.original_price = None;
    assert!(store.add_product(top).is_ok());

    let mut edited = store.get_product(1).unwrap();
    edited.price = i64::MAX;
    edited.original_price = None;
    assert!(matches!(store.update_product(edited), Err(AppError::BadRequest(_))));
    assert_eq!(store.get_product(1).unwrap().price, 19_900);
}

#[test]
fn update_product_replaces_wholesale() {
    let mut store = admin_store();
    let mut product = store.get_product(6).unwrap();
    product.name = "런닝화 2".to_string();
    product.price = 99_000;
    product.status = ProductStatus::Inactive;

    store.update_product(product.clone()).unwrap();

    assert_eq!(store.get_product(6).unwrap(), product);
}

#[test]
fn update_unknown_product_is_not_found() {
    let mut store = admin_store();
    let mut ghost = store.get_product(1).unwrap();
    ghost.id = 404;

    assert!(matches!(store.update_product(ghost), Err(AppError::NotFound(_))));
    assert!(matches!(store.delete_product(404), Err(AppError::NotFound(_))));
    assert!(matches!(store.update_stock(404, 1), Err(AppError::NotFound(_))));
}

#[test]
fn update_stock_sets_value_and_rejects_negative() {
    let mut store = admin_store();

    let product = store.update_stock(5, 12).unwrap();
    assert_eq!(product.stock, 12);
    assert_eq!(product.low_stock_threshold, 5);

    assert!(matches!(store.update_stock(5, -1), Err(AppError::BadRequest(_))));
    assert_eq!(store.get_product(5).unwrap().stock, 12);
    assert_eq!(store.notifications().len(), 4);
}

#[test]
fn stock_views() {
    let store = demo_store();

    let low: Vec<i32> = store.low_stock_products().iter().map(|p| p.id).collect();
    assert_eq!(low, vec![4, 5]);
    let out: Vec<i32> = store.out_of_stock_products().iter().map(|p| p.id).collect();
    assert_eq!(out, vec![5]);
    assert_eq!(store.total_inventory_value(), 29_472_500);

    assert_eq!(store.get_product(5).unwrap().stock_status(), StockStatus::OutOfStock);
    assert_eq!(store.get_product(4).unwrap().stock_status(), StockStatus::Low);
    assert_eq!(store.get_product(1).unwrap().stock_status(), StockStatus::Normal);
}

#[test]
fn inventory_summary_totals() {
    let store = demo_store();

    let summary = store.inventory_summary();

    assert_eq!(summary.total_products, 6);
    assert_eq!(summary.active_products, 6);
    assert_eq!(summary.low_stock, 2);
    assert_eq!(summary.out_of_stock, 1);
    assert_eq!(summary.total_value, 29_472_500);
    let stock: Vec<(Category, i64)> = summary
        .by_category
        .iter()
        .map(|c| (c.category, c.total_stock))
        .collect();
    assert_eq!(
        stock,
        vec![
            (Category::Clothing, 45),
            (Category::Shoes, 57),
            (Category::Electronics, 12),
            (Category::Accessories, 8),
        ]
    );
    let top: Vec<i32> = summary.top_sellers.iter().map(|p| p.id).collect();
    assert_eq!(top, vec![2, 6, 1, 5, 3]);
}

#[test]
fn listing_sorts_and_filters() {
    let store = demo_store();
    let ids = |filter: CatalogFilter| -> Vec<i32> {
        store.list_products(&filter).iter().map(|p| p.id).collect()
    };

    assert_eq!(ids(CatalogFilter::default()), vec![2, 6, 1, 5, 3, 4]);
    assert_eq!(
        ids(CatalogFilter {
            sort: ProductSort::PriceLow,
            ..Default::default()
        }),
        vec![1, 5, 6, 2, 4, 3]
    );
    assert_eq!(
        ids(CatalogFilter {
            sort: ProductSort::Rating,
            ..Default::default()
        }),
        vec![3, 2, 5, 4, 1, 6]
    );
    assert_eq!(
        ids(CatalogFilter {
            category: Some(Category::Shoes),
            sort: ProductSort::PriceHigh,
            ..Default::default()
        }),
        vec![2, 6]
    );
    assert_eq!(
        ids(CatalogFilter {
            search: Some("nike".to_string()),
            ..Default::default()
        }),
        vec![2]
    );
    assert_eq!(
        ids(CatalogFilter {
            status: Some(ProductStatus::Inactive),
            ..Default::default()
        }),
        Vec::<i32>::new()
    );
}

#[test]
fn categories_in_catalog_order() {
    let store = demo_store();
    assert_eq!(
        store.categories(),
        vec![
            Category::Clothing,
            Category::Shoes,
            Category::Electronics,
            Category::Accessories
        ]
    );
}

#[test]
fn discount_percent_rounds() {
    let store = demo_store();
    assert_eq!(store.get_product(1).unwrap().discount_percent(), Some(33));
    assert_eq!(store.get_product(5).unwrap().discount_percent(), Some(31));
    assert_eq!(store.get_product(3).unwrap().discount_percent(), None);
}

#[test]
fn delete_keeps_cart_lines() {
    let mut store = admin_store();
    store.add_to_cart(2, 1).unwrap();

    let removed = store.delete_product(2).unwrap();

    assert_eq!(removed.id, 2);
    assert!(store.find_product(2).is_none());
    assert_eq!(store.cart().lines()[0].product_id, 2);
}
