//! The entry-point every demo implements.

use crate::console::Console;
use serde::Serialize;

/// Static description of a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoInfo {
    /// Short identifier used on the command line (`addition`, `shopping`, ...).
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Log tag the demo writes under.
    pub tag: &'static str,
    /// The concept the demo teaches.
    pub concept: &'static str,
}

/// A self-contained demo program.
///
/// `run` is a linear script: it writes to the console, pauses through it,
/// and returns. Demos never fail; validation problems are part of what
/// they print.
pub trait Demo {
    fn info(&self) -> DemoInfo;

    fn run(&self, console: &mut Console<'_>);
}
