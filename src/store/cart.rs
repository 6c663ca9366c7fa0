use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{CartLine, ProductId},
};

/// Subtotals at or above this ship for free.
pub const FREE_DELIVERY_THRESHOLD: i64 = 50_000;
pub const STANDARD_DELIVERY_FEE: i64 = 3_000;
/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: i32 = 999;

pub fn delivery_fee(subtotal: i64) -> i64 {
    if subtotal >= FREE_DELIVERY_THRESHOLD {
        0
    } else {
        STANDARD_DELIVERY_FEE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartSummary {
    pub selected_count: usize,
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub total: i64,
}

/// Cart lines plus the checkout selection. Selection only ever names lines
/// that are present.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    selected: BTreeSet<ProductId>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn selected_ids(&self) -> Vec<ProductId> {
        self.selected.iter().copied().collect()
    }

    pub fn is_selected(&self, product_id: ProductId) -> bool {
        self.selected.contains(&product_id)
    }

    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines
            .iter()
            .filter(|line| self.selected.contains(&line.product_id))
    }

    /// Badge count: total units across every line.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal: i64 = self.selected_lines().map(CartLine::line_total).sum();
        let fee = delivery_fee(subtotal);
        CartSummary {
            selected_count: self.selected.len(),
            subtotal,
            delivery_fee: fee,
            total: subtotal + fee,
        }
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        self.selected.remove(&product_id);
        self.lines.len() != before
    }

    pub(super) fn remove_many(&mut self, product_ids: &BTreeSet<ProductId>) {
        self.lines
            .retain(|line| !product_ids.contains(&line.product_id));
        self.selected.retain(|id| !product_ids.contains(id));
    }

    pub(super) fn clear(&mut self) {
        self.lines.clear();
        self.selected.clear();
    }
}

fn quantity_limit() -> AppError {
    AppError::bad_request(format!(
        "a cart line holds at most {MAX_LINE_QUANTITY} units"
    ))
}

/// Optional variant picked on the product page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOptions {
    pub size: Option<String>,
    pub color: Option<String>,
}

impl Store {
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: i32) -> AppResult<CartLine> {
        self.add_to_cart_with(product_id, quantity, LineOptions::default())
    }

    /// Adds `quantity` units, merging into an existing line for the same
    /// product. Stock is not checked. A merge past [`MAX_LINE_QUANTITY`]
    /// is rejected and leaves the line as it was.
    pub fn add_to_cart_with(
        &mut self,
        product_id: ProductId,
        quantity: i32,
        options: LineOptions,
    ) -> AppResult<CartLine> {
        let user_id = self.require_session()?.user_id;
        if quantity <= 0 {
            return Err(AppError::bad_request("quantity must be greater than 0"));
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(quantity_limit());
        }

        if let Some(line) = self.cart.line_mut(product_id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .filter(|merged| *merged <= MAX_LINE_QUANTITY)
                .ok_or_else(quantity_limit)?;
            tracing::info!(user_id, product_id, quantity = line.quantity, "cart line merged");
            return Ok(line.clone());
        }

        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| AppError::not_found(format!("product {product_id}")))?;
        let line = CartLine {
            product_id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            selected_size: options.size,
            selected_color: options.color,
        };
        self.cart.lines.push(line.clone());
        self.cart.selected.insert(product_id);
        tracing::info!(user_id, product_id, quantity, "cart line added");
        Ok(line)
    }

    /// Sets a line's quantity exactly. Zero or less removes the line; an
    /// absent line is left alone. Above [`MAX_LINE_QUANTITY`] is rejected.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i32,
    ) -> AppResult<Option<CartLine>> {
        self.require_session()?;
        if quantity <= 0 {
            self.remove_from_cart(product_id)?;
            return Ok(None);
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(quantity_limit());
        }
        match self.cart.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::info!(product_id, quantity, "cart quantity updated");
                Ok(Some(line.clone()))
            }
            None => {
                tracing::debug!(product_id, "quantity update for absent cart line");
                Ok(None)
            }
        }
    }

    /// Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> AppResult<bool> {
        self.require_session()?;
        let removed = self.cart.remove(product_id);
        if removed {
            tracing::info!(product_id, "cart line removed");
        } else {
            tracing::debug!(product_id, "remove for absent cart line");
        }
        Ok(removed)
    }

    /// Replaces the selection; ids without a cart line are ignored.
    pub fn select_lines(&mut self, product_ids: &[ProductId]) -> AppResult<Vec<ProductId>> {
        self.require_session()?;
        let present: BTreeSet<ProductId> = product_ids
            .iter()
            .copied()
            .filter(|id| self.cart.line(*id).is_some())
            .collect();
        self.cart.selected = present;
        Ok(self.cart.selected_ids())
    }

    /// Flips one line's selection and returns the new state.
    pub fn toggle_line(&mut self, product_id: ProductId) -> AppResult<bool> {
        self.require_session()?;
        if self.cart.line(product_id).is_none() {
            tracing::debug!(product_id, "toggle for absent cart line");
            return Ok(false);
        }
        if self.cart.selected.remove(&product_id) {
            Ok(false)
        } else {
            self.cart.selected.insert(product_id);
            Ok(true)
        }
    }

    /// Selects every line, or clears the selection when all are already selected.
    pub fn toggle_select_all(&mut self) -> AppResult<Vec<ProductId>> {
        self.require_session()?;
        if self.cart.selected.len() == self.cart.lines.len() {
            self.cart.selected.clear();
        } else {
            self.cart.selected = self.cart.lines.iter().map(|line| line.product_id).collect();
        }
        Ok(self.cart.selected_ids())
    }
}
