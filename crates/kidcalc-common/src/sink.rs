//! Destinations for console lines.

use crate::console::{Level, LogLine};
use std::io::{self, Write};

const ANSI_GREEN: &str = "\x1b[0;32m";
const ANSI_YELLOW: &str = "\x1b[0;33m";
const ANSI_RED: &str = "\x1b[0;31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Where rendered console lines go.
pub trait LogSink {
    fn write_line(&mut self, line: &LogLine) -> io::Result<()>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write_line(&mut self, _line: &LogLine) -> io::Result<()> {
        Ok(())
    }
}

/// Writes rendered lines to any [`Write`], optionally coloured by level.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    color: bool,
}

/// The sink the `kidcalc` binary prints through.
pub type StdoutSink = WriterSink<io::Stdout>;

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        WriterSink { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StdoutSink {
    pub fn stdout(color: bool) -> Self {
        WriterSink::new(io::stdout(), color)
    }
}

impl<W: Write> LogSink for WriterSink<W> {
    fn write_line(&mut self, line: &LogLine) -> io::Result<()> {
        let rendered = line.render();
        let color = match line.level {
            Some(_) if !self.color => None,
            Some(Level::Info) => Some(ANSI_GREEN),
            Some(Level::Warn) => Some(ANSI_YELLOW),
            Some(Level::Error) => Some(ANSI_RED),
            None => None,
        };
        match color {
            Some(code) => writeln!(self.writer, "{code}{rendered}{ANSI_RESET}"),
            None => writeln!(self.writer, "{rendered}"),
        }
    }
}
