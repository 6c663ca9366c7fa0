use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type ProductId = i32;
pub type UserId = i32;
pub type NotificationId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Clothing,
    Shoes,
    Electronics,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Clothing,
        Category::Shoes,
        Category::Electronics,
        Category::Accessories,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Whole currency units.
    pub price: i64,
    pub original_price: Option<i64>,
    pub image: String,
    pub category: Category,
    pub stock: i32,
    pub low_stock_threshold: i32,
    pub sold_count: i32,
    pub rating: f64,
    pub reviews: i32,
    pub status: ProductStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_out_of_stock() {
            StockStatus::OutOfStock
        } else if self.is_low_stock() {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Rounded percentage off `original_price`, if the product has one.
    pub fn discount_percent(&self) -> Option<i64> {
        let original = self.original_price.filter(|p| *p > 0)?;
        let ratio = 1.0 - self.price as f64 / original as f64;
        Some((ratio * 100.0).round() as i64)
    }

    pub fn inventory_value(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.stock))
    }
}

/// Product fields supplied by an admin; id and sales figures are assigned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    pub stock: i32,
    pub low_stock_threshold: i32,
    pub status: ProductStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub image: String,
    pub quantity: i32,
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Shipped
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub quantity: i32,
    pub image: String,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            brand: line.brand.clone(),
            price: line.price,
            quantity: line.quantity,
            image: line.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
    pub shipping_address: String,
    pub tracking_number: Option<String>,
}

impl Order {
    pub fn items_subtotal(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.price * i64::from(item.quantity))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Order,
    Shipping,
    Promotion,
    Inventory,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub priority: Priority,
}
