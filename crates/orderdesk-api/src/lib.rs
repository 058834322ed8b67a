//! Orderdesk API — axum HTTP boundary for the order service.
//!
//! Exposes the order lifecycle endpoints and the health probe, mapping
//! store results onto status codes and JSON bodies.

pub mod error;
pub mod routes;
pub mod state;
