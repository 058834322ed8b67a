//! The in-memory order store.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use orderdesk_core::error::ValidationError;
use orderdesk_core::order::{Order, OrderDraft};
use orderdesk_core::status::OrderStatus;
use orderdesk_core::validator::OrderValidator;

use crate::query::{OrderPage, OrderQuery};

/// Mutable store state: the order map and the id counter.
///
/// Both live behind one lock so that counter increment and map mutation
/// are a single atomic step: no duplicate ids, no lost updates.
#[derive(Debug)]
struct StoreInner {
    orders: HashMap<String, Order>,
    next_id: u64,
}

/// In-memory store owning the authoritative id-to-order mapping.
///
/// The store is constructed once at service start and shared behind an
/// `Arc`; every operation takes `&self` and goes through the inner
/// read-write lock. Reads run concurrently with each other and are
/// serialized against writers. The id counter starts at 1 and never
/// resets for the process lifetime.
#[derive(Debug)]
pub struct OrderStore {
    validator: OrderValidator,
    inner: RwLock<StoreInner>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            validator: OrderValidator::new(),
            inner: RwLock::new(StoreInner {
                orders: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Validates and stores a candidate order.
    ///
    /// On acceptance the store assigns the next `ORD-<n>` id, sets the
    /// status to `PENDING`, inserts the record, and returns a clone of it.
    /// A rejected draft leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised against the draft.
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, ValidationError> {
        self.validator.validate_order(&draft)?;

        let mut inner = self.inner.write().await;
        let id = format!("ORD-{}", inner.next_id);
        inner.next_id += 1;

        let order = Order {
            id,
            customer_id: draft.customer_id,
            items: draft.items.into_iter().map(Into::into).collect(),
            status: OrderStatus::Pending,
        };
        inner.orders.insert(order.id.clone(), order.clone());

        debug!(id = %order.id, "order created");
        Ok(order)
    }

    /// Looks up an order by id. Returns a cloned record; no side effects.
    pub async fn get(&self, id: &str) -> Option<Order> {
        let inner = self.inner.read().await;
        inner.orders.get(id).cloned()
    }

    /// Returns a snapshot of all live orders, in no particular order.
    ///
    /// The snapshot is an independent copy: mutating it does not affect
    /// store state.
    pub async fn list(&self) -> Vec<Order> {
        let inner = self.inner.read().await;
        inner.orders.values().cloned().collect()
    }

    /// Runs a filtered, paginated query over live orders.
    pub async fn query(&self, query: &OrderQuery) -> OrderPage {
        let inner = self.inner.read().await;
        query.run(inner.orders.values())
    }

    /// Validates `status` and, when the order exists, rewrites its status
    /// in place, returning the updated record.
    ///
    /// Validation takes precedence over existence: an unrecognized status
    /// fails even when `id` is absent. `Ok(None)` signals not-found. The
    /// id and the counter are untouched either way.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidStatus` for a status string
    /// outside the recognized set.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<Option<Order>, ValidationError> {
        let status = self.validator.validate_status(status)?;

        let mut inner = self.inner.write().await;
        match inner.orders.get_mut(id) {
            Some(order) => {
                order.status = status;
                debug!(id, status = %status, "order status updated");
                Ok(Some(order.clone()))
            }
            None => Ok(None),
        }
    }

    /// Removes the order if present. Deleting an absent id is a no-op.
    pub async fn delete(&self, id: &str) {
        let mut inner = self.inner.write().await;
        if inner.orders.remove(id).is_some() {
            debug!(id, "order deleted");
        }
    }

    /// Number of live orders.
    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.orders.len()
    }

    /// Number of live orders whose status string equals `status` exactly.
    ///
    /// Like the query filter, this is a literal comparison: an
    /// unrecognized status string counts zero orders.
    pub async fn count_by_status(&self, status: &str) -> usize {
        let inner = self.inner.read().await;
        inner
            .orders
            .values()
            .filter(|order| order.status.as_str() == status)
            .count()
    }
}
