//! JSON envelope shared by every endpoint: `{ message, data, meta }`.

use serde::Serialize;
use utoipa::ToSchema;

/// Listing position. All fields are `null` for single-resource responses.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn page(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// A listing returned whole, as a single page.
    pub fn whole(total: usize) -> Self {
        let total = total as i64;
        Self::page(1, total, total)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::with_meta(message, data, Meta::default())
    }

    pub fn with_meta(message: impl Into<String>, data: T, meta: Meta) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta: Some(meta),
        }
    }
}
