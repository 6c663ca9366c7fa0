use std::collections::BTreeSet;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Store, cart::delivery_fee};
use crate::{
    error::{AppError, AppResult},
    models::{NotificationType, Order, OrderItem, OrderStatus, Priority, ProductId},
};

/// Order list tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderTab {
    #[default]
    All,
    /// Pending, confirmed or shipped.
    Active,
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderTab {
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            OrderTab::All => true,
            OrderTab::Active => status.is_active(),
            OrderTab::Pending => status == OrderStatus::Pending,
            OrderTab::Confirmed => status == OrderStatus::Confirmed,
            OrderTab::Shipped => status == OrderStatus::Shipped,
            OrderTab::Delivered => status == OrderStatus::Delivered,
            OrderTab::Cancelled => status == OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderStats {
    pub all: usize,
    pub active: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl Store {
    pub fn list_orders(&self, tab: OrderTab) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|order| tab.matches(order.status))
            .cloned()
            .collect()
    }

    pub fn get_order(&self, order_id: &str) -> AppResult<Order> {
        self.orders
            .iter()
            .find(|order| order.id == order_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("order {order_id}")))
    }

    pub fn order_stats(&self) -> OrderStats {
        let count = |tab: OrderTab| self.orders.iter().filter(|o| tab.matches(o.status)).count();
        OrderStats {
            all: self.orders.len(),
            active: count(OrderTab::Active),
            delivered: count(OrderTab::Delivered),
            cancelled: count(OrderTab::Cancelled),
        }
    }

    /// Checks out whatever is currently selected in the cart.
    pub fn checkout_selected(&mut self) -> AppResult<Order> {
        let ids = self.cart.selected_ids();
        self.checkout(&ids)
    }

    /// Turns the named cart lines into a pending order, drops them from the
    /// cart and posts an order notification. Nothing changes on error.
    /// Catalog stock is left as is.
    pub fn checkout(&mut self, product_ids: &[ProductId]) -> AppResult<Order> {
        let user_id = self.require_session()?.user_id;
        let wanted: BTreeSet<ProductId> = product_ids.iter().copied().collect();
        if wanted.is_empty() {
            return Err(AppError::bad_request("nothing selected for checkout"));
        }
        if let Some(missing) = wanted.iter().find(|id| self.cart.line(**id).is_none()) {
            return Err(AppError::bad_request(format!(
                "product {missing} is not in the cart"
            )));
        }

        let items: Vec<OrderItem> = self
            .cart
            .lines()
            .iter()
            .filter(|line| wanted.contains(&line.product_id))
            .map(OrderItem::from)
            .collect();

        let now = Utc::now();
        let date = now.date_naive();
        let mut order = Order {
            id: format!("ORD-{}-{:03}", date.year(), self.next_order_seq),
            date,
            status: OrderStatus::Pending,
            items,
            total_amount: 0,
            shipping_address: self.shipping_address.clone(),
            tracking_number: None,
        };
        let subtotal = order.items_subtotal();
        order.total_amount = subtotal + delivery_fee(subtotal);
        self.next_order_seq += 1;

        self.cart.remove_many(&wanted);
        self.push_notification(
            NotificationType::Order,
            "주문이 완료되었습니다",
            format!("주문번호 {}이 성공적으로 처리되었습니다.", order.id),
            Priority::Medium,
            now,
        );
        self.orders.insert(0, order.clone());

        tracing::info!(
            user_id,
            order_id = %order.id,
            lines = order.items.len(),
            total_amount = order.total_amount,
            "order placed"
        );
        Ok(order)
    }

    /// Cancels a pending order. Any other status is rejected unchanged.
    pub fn cancel_order(&mut self, order_id: &str) -> AppResult<Order> {
        let user_id = self.require_session()?.user_id;
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("order {order_id}")))?;
        if order.status != OrderStatus::Pending {
            return Err(AppError::bad_request(format!(
                "order {order_id} cannot be cancelled once {:?}",
                order.status
            )));
        }
        order.status = OrderStatus::Cancelled;
        tracing::info!(user_id, order_id, "order cancelled");
        Ok(order.clone())
    }
}
