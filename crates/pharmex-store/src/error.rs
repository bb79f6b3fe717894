//! # Store Error Type
//!
//! Unified error type for store operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Pharmex                            │
//! │                                                                     │
//! │  Operation Function                                                 │
//! │  Result<T, StoreError>                                              │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Validation Error? ── ValidationError ──┐                           │
//! │         │                               │                           │
//! │         ▼                               ▼                           │
//! │  Domain Error? ────── CoreError ───── StoreError ──► Frontend       │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Success ─────────────────────────────────────────► Frontend        │
//! │                                                                     │
//! │  The frontend receives { code, message } and decides whether to     │
//! │  surface a toast, a form error, or a generic failure.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use pharmex_core::{CoreError, ValidationError};

/// Error returned from store operations.
///
/// ## Serialization
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "INVALID_TRANSITION",
///   "message": "Order ord-1 is delivered, cannot move to assigned"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for store operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Order status transition not allowed from the current state
    InvalidTransition,

    /// Cart operation failed
    CartError,

    /// Business logic error
    BusinessLogic,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        StoreError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => StoreError::not_found("Product", &id),
            CoreError::OrderNotFound(id) => StoreError::not_found("Order", &id),
            CoreError::StaffNotFound(id) => StoreError::not_found("Delivery staff", &id),
            CoreError::InvalidStatusTransition { .. } => {
                StoreError::new(ErrorCode::InvalidTransition, err.to_string())
            }
            CoreError::EmptyCart => StoreError::cart("Cart is empty"),
            CoreError::NotInCart { .. } => StoreError::cart(err.to_string()),
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                StoreError::cart(err.to_string())
            }
            CoreError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to store errors.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::validation(err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pharmex_core::OrderStatus;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Product", "p-123");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-123");
    }

    #[test]
    fn test_core_transition_error_maps_to_invalid_transition() {
        let core = CoreError::InvalidStatusTransition {
            order_id: "ord-1".to_string(),
            from: OrderStatus::Delivered,
            to: OrderStatus::Assigned,
        };
        let err: StoreError = core.into();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert!(err.message.contains("delivered"));
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let err = StoreError::not_found("Order", "ord-9");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"NOT_FOUND\""));
    }
}
