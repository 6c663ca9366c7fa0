use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{CartLine, ProductId},
    store::{Cart, CartSummary, LineOptions},
};

fn one() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    #[serde(default = "one")]
    pub quantity: i32,
    #[serde(default)]
    pub selected_size: Option<String>,
    #[serde(default)]
    pub selected_color: Option<String>,
}

impl AddToCartRequest {
    pub fn options(&self) -> LineOptions {
        LineOptions {
            size: self.selected_size.clone(),
            color: self.selected_color.clone(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectLinesRequest {
    pub product_ids: Vec<ProductId>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub selected: Vec<ProductId>,
    pub summary: CartSummary,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            selected: cart.selected_ids(),
            summary: cart.summary(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionView {
    pub selected: Vec<ProductId>,
    pub summary: CartSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuantityUpdate {
    /// `None` when the line was removed or never existed.
    pub line: Option<CartLine>,
    pub summary: CartSummary,
}
