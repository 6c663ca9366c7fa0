//! In-memory storefront state.
//!
//! [`Store`] owns the catalog, cart, order book, notification feed and the
//! current session. Its methods are the only way to change that state; every
//! other module reads through the borrowing accessors.

use std::fmt::Debug;

use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{Notification, NotificationId, Order, Product, Role, Session},
};

mod cart;
mod catalog;
mod notifications;
mod orders;
mod seed;
mod session;

pub use cart::{
    Cart, CartSummary, FREE_DELIVERY_THRESHOLD, LineOptions, MAX_LINE_QUANTITY,
    STANDARD_DELIVERY_FEE, delivery_fee,
};
pub use catalog::{CatalogFilter, CategoryStock, InventorySummary, MAX_PRICE, ProductSort};
pub use notifications::NotificationFilter;
pub use orders::{OrderStats, OrderTab};
pub use session::{SessionOverview, SignedIn};

/// Decides which role an email signs in with.
pub trait RolePolicy: Debug + Send + Sync {
    fn role_for(&self, email: &str) -> Role;
}

/// Grants admin to exactly one reserved address; everyone else is a customer.
#[derive(Debug, Clone)]
pub struct AdminEmailPolicy {
    admin_email: String,
}

impl AdminEmailPolicy {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

impl RolePolicy for AdminEmailPolicy {
    fn role_for(&self, email: &str) -> Role {
        if email == self.admin_email {
            Role::Admin
        } else {
            Role::Customer
        }
    }
}

#[derive(Debug)]
struct ActiveSession {
    session: Session,
    token: Uuid,
}

#[derive(Debug)]
pub struct Store {
    policy: Box<dyn RolePolicy>,
    shipping_address: String,
    session: Option<ActiveSession>,
    products: Vec<Product>,
    cart: Cart,
    /// Most recent first.
    orders: Vec<Order>,
    /// Most recent first.
    notifications: Vec<Notification>,
    next_order_seq: u32,
    next_notification_id: NotificationId,
}

impl Store {
    pub fn new(policy: impl RolePolicy + 'static, shipping_address: impl Into<String>) -> Self {
        Self {
            policy: Box::new(policy),
            shipping_address: shipping_address.into(),
            session: None,
            products: Vec::new(),
            cart: Cart::default(),
            orders: Vec::new(),
            notifications: Vec::new(),
            next_order_seq: 1,
            next_notification_id: 1,
        }
    }

    /// Store preloaded with the demo catalog, order history and notifications.
    pub fn with_demo_data(
        policy: impl RolePolicy + 'static,
        shipping_address: impl Into<String>,
    ) -> Self {
        let mut store = Self::new(policy, shipping_address);
        store.products = seed::products();
        store.orders = seed::orders(&store.shipping_address);
        store.notifications = seed::notifications();
        store.next_order_seq = store.orders.len() as u32 + 1;
        store.next_notification_id = store
            .notifications
            .iter()
            .map(|n| n.id)
            .max()
            .unwrap_or(0)
            + 1;
        store
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let policy = AdminEmailPolicy::new(config.admin_email.clone());
        if config.seed_demo_data {
            Self::with_demo_data(policy, config.shipping_address.clone())
        } else {
            Self::new(policy, config.shipping_address.clone())
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref().map(|active| &active.session)
    }

    pub(crate) fn require_session(&self) -> AppResult<&Session> {
        match self.session() {
            Some(session) => Ok(session),
            None => {
                tracing::warn!("rejected operation without an active session");
                Err(AppError::AuthenticationRequired)
            }
        }
    }

    pub(crate) fn require_admin(&self) -> AppResult<&Session> {
        let session = self.require_session()?;
        if !session.is_admin() {
            tracing::warn!(user_id = session.user_id, "rejected admin operation");
            return Err(AppError::Forbidden);
        }
        Ok(session)
    }
}
