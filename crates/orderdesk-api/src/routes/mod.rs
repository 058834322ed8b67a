//! Route modules for the Orderdesk API.

pub mod health;
pub mod orders;
