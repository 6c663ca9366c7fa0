use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{Category, NewProduct, Product, ProductId, ProductStatus},
};

const TOP_SELLERS: usize = 5;
/// Ceiling for `price` and `original_price`.
pub const MAX_PRICE: i64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Most reviewed first.
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub category: Option<Category>,
    pub status: Option<ProductStatus>,
    /// Case-insensitive match against name or brand.
    pub search: Option<String>,
    pub sort: ProductSort,
}

impl CatalogFilter {
    fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|c| c != product.category) {
            return false;
        }
        if self.status.is_some_and(|s| s != product.status) {
            return false;
        }
        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.brand.to_lowercase().contains(&term)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryStock {
    pub category: Category,
    pub total_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InventorySummary {
    pub total_products: usize,
    pub active_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_value: i64,
    pub by_category: Vec<CategoryStock>,
    pub top_sellers: Vec<Product>,
}

fn validate(
    name: &str,
    price: i64,
    original_price: Option<i64>,
    stock: i32,
    low_stock_threshold: i32,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if price <= 0 {
        return Err(AppError::bad_request("price must be greater than 0"));
    }
    if price > MAX_PRICE || original_price.is_some_and(|original| original > MAX_PRICE) {
        return Err(AppError::bad_request(format!(
            "price must not exceed {MAX_PRICE}"
        )));
    }
    if original_price.is_some_and(|original| original < price) {
        return Err(AppError::bad_request(
            "original price must not be below the price",
        ));
    }
    if stock < 0 {
        return Err(AppError::bad_request("stock cannot be negative"));
    }
    if low_stock_threshold < 0 {
        return Err(AppError::bad_request("low stock threshold cannot be negative"));
    }
    Ok(())
}

impl Store {
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn get_product(&self, id: ProductId) -> AppResult<Product> {
        self.find_product(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("product {id}")))
    }

    pub fn list_products(&self, filter: &CatalogFilter) -> Vec<Product> {
        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        match filter.sort {
            ProductSort::Popular => items.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
            ProductSort::PriceLow => items.sort_by(|a, b| a.price.cmp(&b.price)),
            ProductSort::PriceHigh => items.sort_by(|a, b| b.price.cmp(&a.price)),
            ProductSort::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            ProductSort::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        items
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    pub fn out_of_stock_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_out_of_stock())
            .cloned()
            .collect()
    }

    pub fn total_inventory_value(&self) -> i64 {
        self.products
            .iter()
            .map(Product::inventory_value)
            .fold(0, i64::saturating_add)
    }

    pub fn inventory_summary(&self) -> InventorySummary {
        let by_category = Category::ALL
            .iter()
            .map(|category| CategoryStock {
                category: *category,
                total_stock: self
                    .products
                    .iter()
                    .filter(|p| p.category == *category)
                    .map(|p| i64::from(p.stock))
                    .sum(),
            })
            .collect();

        let mut top_sellers = self.products.clone();
        top_sellers.sort_by(|a, b| b.sold_count.cmp(&a.sold_count));
        top_sellers.truncate(TOP_SELLERS);

        InventorySummary {
            total_products: self.products.len(),
            active_products: self
                .products
                .iter()
                .filter(|p| p.status == ProductStatus::Active)
                .count(),
            low_stock: self.products.iter().filter(|p| p.is_low_stock()).count(),
            out_of_stock: self.products.iter().filter(|p| p.is_out_of_stock()).count(),
            total_value: self.total_inventory_value(),
            by_category,
            top_sellers,
        }
    }

    /// Adds a product with the next id after the current maximum (1 for an
    /// empty catalog) and zeroed sales figures.
    pub fn add_product(&mut self, fields: NewProduct) -> AppResult<Product> {
        let admin_id = self.require_admin()?.user_id;
        validate(
            &fields.name,
            fields.price,
            fields.original_price,
            fields.stock,
            fields.low_stock_threshold,
        )?;

        let id = self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: fields.name,
            brand: fields.brand,
            price: fields.price,
            original_price: fields.original_price,
            image: fields.image,
            category: fields.category,
            stock: fields.stock,
            low_stock_threshold: fields.low_stock_threshold,
            sold_count: 0,
            rating: 0.0,
            reviews: 0,
            status: fields.status,
            description: fields.description,
            features: fields.features,
        };
        self.products.push(product.clone());
        tracing::info!(admin_id, product_id = id, "product added");
        Ok(product)
    }

    /// Replaces the product with the same id wholesale.
    pub fn update_product(&mut self, product: Product) -> AppResult<Product> {
        let admin_id = self.require_admin()?.user_id;
        validate(
            &product.name,
            product.price,
            product.original_price,
            product.stock,
            product.low_stock_threshold,
        )?;
        if !(0.0..=5.0).contains(&product.rating) {
            return Err(AppError::bad_request("rating must be between 0 and 5"));
        }
        if product.sold_count < 0 || product.reviews < 0 {
            return Err(AppError::bad_request("sales figures cannot be negative"));
        }

        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| AppError::not_found(format!("product {}", product.id)))?;
        *slot = product.clone();
        tracing::info!(admin_id, product_id = product.id, "product updated");
        Ok(product)
    }

    /// Removes a product. Cart lines and orders keep their snapshots.
    pub fn delete_product(&mut self, id: ProductId) -> AppResult<Product> {
        let admin_id = self.require_admin()?.user_id;
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("product {id}")))?;
        let removed = self.products.remove(index);
        tracing::info!(admin_id, product_id = id, "product deleted");
        Ok(removed)
    }

    pub fn update_stock(&mut self, id: ProductId, new_stock: i32) -> AppResult<Product> {
        let admin_id = self.require_admin()?.user_id;
        if new_stock < 0 {
            return Err(AppError::bad_request("stock cannot be negative"));
        }
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("product {id}")))?;
        let previous = product.stock;
        product.stock = new_stock;
        tracing::info!(admin_id, product_id = id, previous, stock = new_stock, "stock updated");
        Ok(product.clone())
    }
}
