use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, ProductId};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Cart lines to order; the current selection when omitted.
    #[serde(default)]
    pub product_ids: Option<Vec<ProductId>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
