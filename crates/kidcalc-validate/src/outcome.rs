//! The outcome record every validator returns.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Classification of a validation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No problem found.
    None,
    DivisionByZero,
    /// Not a number, malformed, or failed a checksum.
    InvalidInput,
    OutOfRange,
    /// Negative (or zero) where only positive values make sense.
    NegativeValue,
    Overflow,
    /// A non-zero computation collapsed to zero.
    Underflow,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::None,
        ErrorCode::DivisionByZero,
        ErrorCode::InvalidInput,
        ErrorCode::OutOfRange,
        ErrorCode::NegativeValue,
        ErrorCode::Overflow,
        ErrorCode::Underflow,
    ];

    pub fn is_error(self) -> bool {
        self != ErrorCode::None
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::None => write!(f, "none"),
            ErrorCode::DivisionByZero => write!(f, "division by zero"),
            ErrorCode::InvalidInput => write!(f, "invalid input"),
            ErrorCode::OutOfRange => write!(f, "out of range"),
            ErrorCode::NegativeValue => write!(f, "negative value"),
            ErrorCode::Overflow => write!(f, "overflow"),
            ErrorCode::Underflow => write!(f, "underflow"),
        }
    }
}

/// A failed validation as a `std::error::Error`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
}

/// Result of one validation call.
///
/// Built once by the validator and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Computed value; `0.0` on failure unless the failed computation
    /// produced something worth keeping (an overflowed quotient).
    pub value: f64,
    pub error: ErrorCode,
    pub message: String,
}

impl Outcome {
    pub fn ok(value: f64, message: impl Into<String>) -> Self {
        Outcome {
            value,
            error: ErrorCode::None,
            message: message.into(),
        }
    }

    pub fn fail(error: ErrorCode, message: impl Into<String>) -> Self {
        debug_assert!(error.is_error());
        Outcome {
            value: 0.0,
            error,
            message: message.into(),
        }
    }

    pub(crate) fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn is_ok(&self) -> bool {
        !self.error.is_error()
    }

    pub fn into_result(self) -> Result<f64, ValidationError> {
        if self.is_ok() {
            Ok(self.value)
        } else {
            Err(ValidationError {
                code: self.error,
                message: self.message,
            })
        }
    }
}
