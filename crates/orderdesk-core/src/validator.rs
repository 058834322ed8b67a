//! Candidate-order and status validation rules.

use crate::error::ValidationError;
use crate::order::OrderDraft;
use crate::status::OrderStatus;

/// Stateless rule-checker consulted before any store mutation.
///
/// Checks are fail-fast: the first violated rule is returned and later
/// rules are never evaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValidator;

impl OrderValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a candidate order prior to creation.
    ///
    /// Rules, in order: `customerId` non-empty, `items` non-empty, then
    /// for each item in sequence `productId` non-empty, `quantity` greater
    /// than zero, `price` greater than zero.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` or
    /// `ValidationError::InvalidValue` naming the first violated field.
    pub fn validate_order(&self, draft: &OrderDraft) -> Result<(), ValidationError> {
        if draft.customer_id.is_empty() {
            return Err(ValidationError::MissingField("customerId"));
        }
        if draft.items.is_empty() {
            return Err(ValidationError::MissingField("items"));
        }
        for item in &draft.items {
            if item.product_id.is_empty() {
                return Err(ValidationError::MissingField("productId"));
            }
            if item.quantity <= 0 {
                return Err(ValidationError::InvalidValue("quantity"));
            }
            if item.price <= 0.0 {
                return Err(ValidationError::InvalidValue("price"));
            }
        }
        Ok(())
    }

    /// Validates a status string against the fixed status set.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidStatus` unless the string is
    /// exactly one of the five recognized values.
    pub fn validate_status(&self, status: &str) -> Result<OrderStatus, ValidationError> {
        status.parse()
    }

    /// Returns `true` iff `status` is a recognized status value.
    #[must_use]
    pub fn is_valid_status(&self, status: &str) -> bool {
        self.validate_status(status).is_ok()
    }
}
