//! Demo data the storefront boots with.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::{
    Category, Notification, NotificationType, Order, OrderItem, OrderStatus, Priority, Product,
    ProductId, ProductStatus,
};

const TEE_IMAGE: &str = "https://images.unsplash.com/photo-1627342229908-71efbac25f08";
const SNEAKER_IMAGE: &str = "https://images.unsplash.com/photo-1622760807301-4d2351a5a942";
const PHONE_IMAGE: &str = "https://images.unsplash.com/photo-1758186386318-42f7fb10f465";
const WATCH_IMAGE: &str = "https://images.unsplash.com/photo-1636289141131-389e44e981c0";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: ProductId,
    name: &str,
    brand: &str,
    price: i64,
    original_price: Option<i64>,
    image: &str,
    category: Category,
    stock: i32,
    low_stock_threshold: i32,
    sold_count: i32,
    rating: f64,
    reviews: i32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        original_price,
        image: image.to_string(),
        category,
        stock,
        low_stock_threshold,
        sold_count,
        rating,
        reviews,
        status: ProductStatus::Active,
        description: None,
        features: Vec::new(),
    }
}

pub(super) fn products() -> Vec<Product> {
    vec![
        product(1, "에센셜 화이트 티셔츠", "UNIQLO", 19_900, Some(29_900), TEE_IMAGE, Category::Clothing, 45, 10, 156, 4.5, 89),
        product(2, "에어 맥스 270", "NIKE", 159_000, Some(179_000), SNEAKER_IMAGE, Category::Shoes, 23, 15, 234, 4.8, 156),
        product(3, "아이폰 15 Pro", "Apple", 1_550_000, None, PHONE_IMAGE, Category::Electronics, 12, 5, 89, 4.9, 45),
        product(4, "클래식 워치", "CITIZEN", 280_000, Some(350_000), WATCH_IMAGE, Category::Accessories, 8, 10, 67, 4.6, 34),
        product(5, "데님 재킷", "LEVI'S", 89_000, Some(129_000), TEE_IMAGE, Category::Clothing, 0, 5, 123, 4.7, 78),
        product(6, "런닝화", "ADIDAS", 120_000, None, SNEAKER_IMAGE, Category::Shoes, 34, 20, 189, 4.4, 123),
    ]
}

pub(super) fn orders(shipping_address: &str) -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2024-001".to_string(),
            date: date(2024, 1, 20),
            status: OrderStatus::Delivered,
            items: vec![OrderItem {
                product_id: 1,
                name: "에센셜 화이트 티셔츠".to_string(),
                brand: "UNIQLO".to_string(),
                price: 19_900,
                quantity: 2,
                image: TEE_IMAGE.to_string(),
            }],
            total_amount: 42_800,
            shipping_address: shipping_address.to_string(),
            tracking_number: Some("1234567890".to_string()),
        },
        Order {
            id: "ORD-2024-002".to_string(),
            date: date(2024, 1, 18),
            status: OrderStatus::Shipped,
            items: vec![OrderItem {
                product_id: 2,
                name: "에어 맥스 270".to_string(),
                brand: "NIKE".to_string(),
                price: 159_000,
                quantity: 1,
                image: SNEAKER_IMAGE.to_string(),
            }],
            total_amount: 159_000,
            shipping_address: shipping_address.to_string(),
            tracking_number: Some("0987654321".to_string()),
        },
    ]
}

pub(super) fn notifications() -> Vec<Notification> {
    let entry = |id, kind, title: &str, message: &str, timestamp, read, priority| Notification {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp,
        read,
        priority,
    };
    vec![
        entry(
            1,
            NotificationType::Order,
            "주문이 완료되었습니다",
            "주문번호 ORD-2024-001이 성공적으로 처리되었습니다.",
            at(2024, 1, 20, 10, 30),
            false,
            Priority::Medium,
        ),
        entry(
            2,
            NotificationType::Shipping,
            "상품이 배송 중입니다",
            "주문하신 상품이 배송을 시작했습니다. 운송장번호: 1234567890",
            at(2024, 1, 19, 14, 20),
            false,
            Priority::Medium,
        ),
        entry(
            3,
            NotificationType::Inventory,
            "재고 부족 알림",
            "데님 재킷의 재고가 부족합니다. 현재 재고: 0개",
            at(2024, 1, 18, 9, 15),
            true,
            Priority::High,
        ),
        entry(
            4,
            NotificationType::Promotion,
            "신규 할인 이벤트",
            "겨울 의류 30% 할인 이벤트가 시작되었습니다!",
            at(2024, 1, 17, 12, 0),
            false,
            Priority::Low,
        ),
    ]
}
