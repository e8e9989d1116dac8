//! Running demos through a session.

use crate::config::RunnerConfig;
use crate::error::RunnerError;
use kidcalc_common::{Demo, Level, LogLine, RealTimePacer, Session, StdoutSink};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::Path;

/// What one demo wrote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoRun {
    pub id: &'static str,
    pub lines: usize,
    pub warnings: usize,
    pub errors: usize,
    /// Virtual time the demo spent pausing.
    pub elapsed_ms: u64,
}

/// Per-demo statistics for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub runs: Vec<DemoRun>,
}

impl RunSummary {
    pub fn total_errors(&self) -> usize {
        self.runs.iter().map(|r| r.errors).sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.runs.iter().map(|r| r.warnings).sum()
    }
}

/// A session printing to stdout, paced in real time per `config`.
///
/// Lines are coloured only when `config.color` is set and stdout is a
/// terminal.
pub fn build_session(config: &RunnerConfig) -> Session {
    let color = use_color(config, std::io::stdout().is_terminal());
    tracing::debug!(color, "building stdout session");
    Session::new(
        Box::new(StdoutSink::stdout(color)),
        Box::new(RealTimePacer::new(config.pacing.clone())),
    )
}

fn use_color(config: &RunnerConfig, is_terminal: bool) -> bool {
    config.color && is_terminal
}

/// Run each demo in turn under its own tag.
pub fn run_demos(demos: &[Box<dyn Demo>], session: &mut Session) -> RunSummary {
    let mut summary = RunSummary::default();

    for demo in demos {
        let info = demo.info();
        let first_line = session.transcript().len();
        let started_ms = session.elapsed_ms();
        tracing::info!(demo = info.id, tag = info.tag, "starting demo");

        demo.run(&mut session.console(info.tag));

        let written = &session.transcript()[first_line..];
        let count = |level: Level| written.iter().filter(|l| l.level == Some(level)).count();
        let run = DemoRun {
            id: info.id,
            lines: written.len(),
            warnings: count(Level::Warn),
            errors: count(Level::Error),
            elapsed_ms: session.elapsed_ms() - started_ms,
        };
        tracing::info!(
            demo = run.id,
            lines = run.lines,
            warnings = run.warnings,
            errors = run.errors,
            elapsed_ms = run.elapsed_ms,
            "demo finished"
        );
        summary.runs.push(run);
    }

    summary
}

/// Write `lines` as a pretty-printed JSON array.
pub fn write_transcript(path: impl AsRef<Path>, lines: &[LogLine]) -> Result<(), RunnerError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, lines)?;
    writeln!(writer)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "wrote transcript");
    Ok(())
}
