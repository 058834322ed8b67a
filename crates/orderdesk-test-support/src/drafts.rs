//! Draft builders — candidate orders for store and API tests.

use orderdesk_core::order::{DraftItem, OrderDraft};

/// A draft item with the given product, quantity, and price.
#[must_use]
pub fn draft_item(product_id: &str, quantity: i64, price: f64) -> DraftItem {
    DraftItem {
        product_id: product_id.to_owned(),
        quantity,
        price,
    }
}

/// A draft order for `customer_id` with the given items.
#[must_use]
pub fn draft(customer_id: &str, items: Vec<DraftItem>) -> OrderDraft {
    OrderDraft {
        customer_id: customer_id.to_owned(),
        items,
    }
}

/// A valid single-item draft for `customer_id`.
#[must_use]
pub fn draft_for(customer_id: &str) -> OrderDraft {
    draft(customer_id, vec![draft_item("PROD-1", 1, 9.99)])
}

/// A valid single-item draft for customer `"C1"`.
#[must_use]
pub fn valid_draft() -> OrderDraft {
    draft_for("C1")
}
