use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Product, StockStatus};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub discount_percent: Option<i64>,
    pub stock_status: StockStatus,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            discount_percent: product.discount_percent(),
            stock_status: product.stock_status(),
            product,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<ProductView>,
}

impl From<Vec<Product>> for ProductList {
    fn from(products: Vec<Product>) -> Self {
        Self {
            items: products.into_iter().map(ProductView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStockRequest {
    pub stock: i32,
}
