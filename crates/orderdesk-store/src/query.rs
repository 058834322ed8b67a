//! Order query parameters, filtering, ordering, and pagination.

use serde::Deserialize;

use orderdesk_core::order::Order;

/// Page size applied when the caller does not supply one.
const DEFAULT_PAGE_SIZE: usize = 20;

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Parameters for a filtered, paginated order query.
///
/// `status` and `customer_id` are exact-match, case-sensitive filters,
/// AND-combined; a filter left as `None` matches every order. The status
/// filter is a literal string comparison, not a parse, so an unrecognized
/// status string simply matches nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    /// Zero-indexed page, defaulting to 0.
    #[serde(default)]
    pub page: usize,
    /// Page size, defaulting to 20.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Status filter.
    #[serde(default)]
    pub status: Option<String>,
    /// Customer filter.
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl Default for OrderQuery {
    /// The unfiltered first page: `page` 0, `size` 20.
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
            status: None,
            customer_id: None,
        }
    }
}

impl OrderQuery {
    fn matches(&self, order: &Order) -> bool {
        self.status
            .as_deref()
            .is_none_or(|status| order.status.as_str() == status)
            && self
                .customer_id
                .as_deref()
                .is_none_or(|customer_id| order.customer_id == customer_id)
    }

    /// Filters, orders, and slices `orders` into the requested page.
    ///
    /// Filtering happens before pagination, so the page window is computed
    /// over the filtered result count. Ordering is descending lexicographic
    /// comparison of the id strings: `"ORD-9"` sorts before `"ORD-10"`. An
    /// out-of-range page, or a size of zero, yields an empty page rather
    /// than an error.
    pub(crate) fn run<'a, I>(&self, orders: I) -> OrderPage
    where
        I: Iterator<Item = &'a Order>,
    {
        let mut filtered: Vec<Order> = orders
            .filter(|order| self.matches(order))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.id.cmp(&a.id));

        let start = self.page.saturating_mul(self.size);
        let orders = filtered.into_iter().skip(start).take(self.size).collect();

        OrderPage {
            orders,
            page: self.page,
            size: self.size,
        }
    }
}

/// One page of query results plus the applied pagination parameters.
#[derive(Debug, Clone)]
pub struct OrderPage {
    /// Orders on this page, in descending id-string order.
    pub orders: Vec<Order>,
    /// The applied zero-indexed page.
    pub page: usize,
    /// The applied page size.
    pub size: usize,
}
