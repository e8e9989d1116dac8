//! Arithmetic demos.
//!
//! Four scripted lessons, each a [`Demo`](kidcalc_common::Demo):
//!
//! - [`AdditionDemo`] - counting mom's eggs (`EGGS_MATH`)
//! - [`SubtractionDemo`] - giving toys away (`TOYS_CHALLENGE`)
//! - [`MultiplicationDemo`] - bags of candy (`CANDY_PROJECT`)
//! - [`ShoppingDemo`] - a market bill with discount, VAT and a split (`SHOPPING_MATH`)
//!
//! The arithmetic lives in small free functions so it can be checked without
//! going through the console.

pub mod addition;
pub mod multiplication;
pub mod shopping;
pub mod subtraction;

mod picture;

pub use addition::{AdditionConfig, AdditionDemo};
pub use multiplication::{MultiplicationConfig, MultiplicationDemo};
pub use shopping::{ShoppingConfig, ShoppingDemo};
pub use subtraction::{SubtractionConfig, SubtractionDemo};
