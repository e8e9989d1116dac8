//! Runner for the kidcalc demos.
//!
//! Loads an optional YAML configuration, builds the demo registry, runs the
//! selected demos one after another through a single [`Session`], and can
//! write the resulting transcript as JSON.
//!
//! ```rust,no_run
//! use kidcalc_runner::{build_session, demos, run_demos, RunnerConfig};
//!
//! let config = RunnerConfig::from_file("kidcalc.yaml")?;
//! let registry = demos(&config);
//! let mut session = build_session(&config);
//! let summary = run_demos(&registry, &mut session);
//! println!("{} demos, {} errors logged", summary.runs.len(), summary.total_errors());
//! # Ok::<(), kidcalc_runner::RunnerError>(())
//! ```
//!
//! [`Session`]: kidcalc_common::Session

mod config;
mod error;
mod registry;
mod run;

pub use config::{Overrides, RunnerConfig, MAX_COUNT, MAX_PRICE};
pub use error::{ConfigError, RunnerError};
pub use registry::{demos, select};
pub use run::{build_session, run_demos, write_transcript, DemoRun, RunSummary};

/// Result type for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;
