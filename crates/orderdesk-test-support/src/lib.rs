//! Shared test fixtures for the Orderdesk service.

mod drafts;

pub use drafts::{draft, draft_for, draft_item, valid_draft};
