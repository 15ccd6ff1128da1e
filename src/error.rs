//! Validation Errors
//!
//! Typed reasons behind rejected input. The inventory controller discards
//! `AddRejected` so invalid adds stay silent in the UI.

use thiserror::Error;

/// Why an inventory add attempt was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddRejected {
    #[error("item description is empty")]
    EmptyItem,
    #[error("quantity {0:?} is not a whole number")]
    NotANumber(String),
    #[error("quantity {0} is below 1")]
    NotPositive(i64),
}

/// Why the booking form could not produce an estimate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidCount { field: &'static str, value: String },
    #[error("distance must be a number, got {0:?}")]
    InvalidDistance(String),
}

impl BookingError {
    /// Message shown above the booking form
    pub fn user_message(&self) -> &'static str {
        "Please provide valid numbers for bedrooms, stairs, heavy items and distance."
    }
}
