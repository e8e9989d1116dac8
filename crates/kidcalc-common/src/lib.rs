//! Shared plumbing for the kidcalc demos.
//!
//! Every demo is a linear script: compute a little, write a few log lines,
//! pause so a human can keep up. This crate provides the pieces those scripts
//! are written against:
//!
//! - [`Console`] - a tagged, leveled log stream (`I (3000) EGGS_MATH: ...`)
//! - [`Session`] - owns the sink, the pacer and the transcript for one run
//! - [`Pacer`] - cooperative millisecond delays with a virtual clock
//! - [`Demo`] - the entry-point trait every demo implements
//!
//! # Example
//!
//! ```rust
//! use kidcalc_common::{InstantPacer, NullSink, Session};
//!
//! let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
//! let mut console = session.console("EGGS_MATH");
//! console.info(format_args!("{} + {} = {}", 4, 2, 4 + 2));
//! console.delay(3000);
//! console.info("done");
//!
//! let lines = session.transcript();
//! assert_eq!(lines[1].render(), "I (3000) EGGS_MATH: done");
//! ```

mod console;
mod demo;
mod pacing;
mod sink;

pub use console::*;
pub use demo::*;
pub use pacing::*;
pub use sink::*;
