//! Orderdesk Core — shared order domain types and validation rules.
//!
//! This crate defines the order model, the fixed status set, and the
//! validation rules that gate every mutation. It contains no
//! infrastructure code.

pub mod error;
pub mod order;
pub mod status;
pub mod validator;
