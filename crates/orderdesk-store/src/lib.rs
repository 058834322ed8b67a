//! Orderdesk Store — the in-memory order store.
//!
//! Owns the authoritative mapping from order id to order record plus the
//! monotonic id counter, and implements the filtered, paginated query over
//! live orders. All state is process-local and volatile: it is lost on
//! restart by design.

pub mod query;
pub mod store;
