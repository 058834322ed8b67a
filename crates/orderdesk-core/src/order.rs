//! The order domain model.

use serde::{Deserialize, Serialize};

use crate::status::OrderStatus;

/// A customer's purchase request, tracked through a status lifecycle.
///
/// `id` and `status` are owned by the store: the id is assigned exactly
/// once at creation and never reused, even after deletion; the status only
/// changes through the status-update operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier, `"ORD-"` followed by a monotonic integer.
    pub id: String,
    /// Owning customer. Non-empty for every persisted order.
    pub customer_id: String,
    /// Line items. Non-empty, and individually valid, for every persisted
    /// order.
    pub items: Vec<OrderItem>,
    /// Current lifecycle status.
    pub status: OrderStatus,
}

/// A line item owned by its parent [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: String,
    /// Number of units, greater than zero.
    pub quantity: i64,
    /// Unit price, greater than zero.
    pub price: f64,
}

/// A caller-supplied candidate order, before the store assigns `id` and
/// `status`.
///
/// Every field defaults when absent so that a missing field reaches the
/// validator as an empty value instead of failing deserialization at the
/// transport boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Owning customer.
    #[serde(default)]
    pub customer_id: String,
    /// Proposed line items.
    #[serde(default)]
    pub items: Vec<DraftItem>,
}

/// A candidate line item within an [`OrderDraft`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    /// Product identifier.
    #[serde(default)]
    pub product_id: String,
    /// Number of units.
    #[serde(default)]
    pub quantity: i64,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
}

impl From<DraftItem> for OrderItem {
    fn from(item: DraftItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        }
    }
}
