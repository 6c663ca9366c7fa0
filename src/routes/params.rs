use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    models::{Category, ProductStatus},
    response::Meta,
    store::{NotificationFilter, OrderTab, ProductSort},
};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Page (from 1), page size (1..=100) and the number of items to skip.
    /// The offset saturates, so a huge page number yields an empty page.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }

    /// Cuts one page out of an already filtered list.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, Meta) {
        let (page, per_page, offset) = self.normalize();
        let total = items.len() as i64;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let items = items
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect();
        (items, Meta::page(page, per_page, total))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub category: Option<Category>,
    pub status: Option<ProductStatus>,
    /// Matches name or brand.
    pub q: Option<String>,
    pub sort_by: Option<ProductSort>,
}

impl ProductQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub tab: Option<OrderTab>,
}

impl OrderListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotificationQuery {
    pub filter: Option<NotificationFilter>,
}
