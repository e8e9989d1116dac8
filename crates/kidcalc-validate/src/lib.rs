//! # kidcalc-validate
//!
//! The error-handling lesson: a handful of small validators, each returning
//! an [`Outcome`] instead of failing, and scripted scenarios that call them
//! with good and bad inputs.
//!
//! ## Validators
//!
//! Every validator logs what it is checking, tests its guards in a fixed
//! order and returns on the first one that fails:
//!
//! - [`safe_divide`] - zero divisor, then overflow, then underflow
//! - [`validate_money`] - negative, then over one trillion, then rounds to cents
//! - [`validate_number`] - empty, then unparseable, then NaN/infinite
//! - [`calculate_interest`] - principal, rate range, year range, overflow
//! - [`validate_email`], [`validate_phone_number`], [`validate_national_id`]
//!
//! ## Example
//!
//! ```rust
//! use kidcalc_common::{InstantPacer, NullSink, Session};
//! use kidcalc_validate::{safe_divide, ErrorCode};
//!
//! let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
//! let mut console = session.console("ERROR_HANDLING");
//!
//! let outcome = safe_divide(&mut console, 12.0, 0.0, "12 slices for 0 customers");
//! assert_eq!(outcome.error, ErrorCode::DivisionByZero);
//!
//! let outcome = safe_divide(&mut console, 12.0, 4.0, "12 slices for 4 customers");
//! assert_eq!(outcome.into_result(), Ok(3.0));
//! ```

mod art;
mod demo;
mod outcome;
pub mod scenarios;
mod validators;

pub use art::{ascii_art, show_ascii_art};
pub use demo::{ErrorHandlingDemo, TAG};
pub use outcome::{ErrorCode, Outcome, ValidationError};
pub use validators::*;
