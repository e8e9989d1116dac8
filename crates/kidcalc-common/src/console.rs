//! Tagged, leveled console output.
//!
//! Lines render the way ESP-IDF's logger prints them:
//!
//! ```text
//! I (3000) EGGS_MATH: = 4 + 2
//! W (6000) TOYS_CHALLENGE: cannot give any away, still 3 toys
//! ```
//!
//! Plain lines (no level) render as bare text and are used for pictures
//! printed straight to the terminal.

use crate::pacing::Pacer;
use crate::sink::LogSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Single-letter prefix used when rendering.
    pub fn letter(self) -> char {
        match self {
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    /// `None` for plain lines printed without a prefix.
    pub level: Option<Level>,
    pub tag: String,
    /// Virtual time of the line, in milliseconds since the session started.
    pub timestamp_ms: u64,
    pub text: String,
}

impl LogLine {
    /// Render the line without colour.
    pub fn render(&self) -> String {
        match self.level {
            Some(level) => format!(
                "{} ({}) {}: {}",
                level.letter(),
                self.timestamp_ms,
                self.tag,
                self.text
            ),
            None => self.text.clone(),
        }
    }
}

/// One run's worth of console state.
///
/// A session owns the output sink, the pacer and a transcript of every line
/// written through any [`Console`] borrowed from it.
pub struct Session {
    sink: Box<dyn LogSink>,
    pacer: Box<dyn Pacer>,
    transcript: Vec<LogLine>,
}

impl Session {
    pub fn new(sink: Box<dyn LogSink>, pacer: Box<dyn Pacer>) -> Self {
        Session {
            sink,
            pacer,
            transcript: Vec::new(),
        }
    }

    /// Borrow a console that writes under `tag`.
    pub fn console(&mut self, tag: &str) -> Console<'_> {
        Console {
            session: self,
            tag: tag.to_string(),
        }
    }

    /// Every line written so far, in order.
    pub fn transcript(&self) -> &[LogLine] {
        &self.transcript
    }

    /// Consume the session, keeping only its transcript.
    pub fn into_transcript(self) -> Vec<LogLine> {
        self.transcript
    }

    /// First line whose text contains `needle`.
    pub fn find(&self, needle: &str) -> Option<&LogLine> {
        self.transcript.iter().find(|line| line.text.contains(needle))
    }

    /// Number of lines written at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.level == Some(level))
            .count()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.pacer.elapsed_ms()
    }

    fn emit(&mut self, level: Option<Level>, tag: &str, text: &str) {
        let timestamp_ms = self.pacer.elapsed_ms();
        for part in text.split('\n') {
            let line = LogLine {
                level,
                tag: tag.to_string(),
                timestamp_ms,
                text: part.to_string(),
            };
            if let Err(e) = self.sink.write_line(&line) {
                tracing::warn!(error = %e, "console sink write failed");
            }
            self.transcript.push(line);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("lines", &self.transcript.len())
            .field("elapsed_ms", &self.pacer.elapsed_ms())
            .finish()
    }
}

/// A tagged view of a [`Session`].
///
/// Text containing `\n` is split into several lines sharing the same
/// level, tag and timestamp.
#[derive(Debug)]
pub struct Console<'a> {
    session: &'a mut Session,
    tag: String,
}

impl Console<'_> {
    pub fn info(&mut self, text: impl fmt::Display) {
        self.log(Some(Level::Info), text);
    }

    pub fn warn(&mut self, text: impl fmt::Display) {
        self.log(Some(Level::Warn), text);
    }

    pub fn error(&mut self, text: impl fmt::Display) {
        self.log(Some(Level::Error), text);
    }

    /// An empty info line, used as a paragraph break.
    pub fn blank(&mut self) {
        self.log(Some(Level::Info), "");
    }

    /// A line printed without level, timestamp or tag.
    pub fn plain(&mut self, text: impl fmt::Display) {
        self.log(None, text);
    }

    /// Pause for `ms` milliseconds of demo time.
    pub fn delay(&mut self, ms: u64) {
        self.session.pacer.delay(ms);
    }

    fn log(&mut self, level: Option<Level>, text: impl fmt::Display) {
        let text = text.to_string();
        self.session.emit(level, &self.tag, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InstantPacer, NullSink};

    fn session() -> Session {
        Session::new(Box::new(NullSink), Box::new(InstantPacer::new()))
    }

    #[test]
    fn test_render_leveled_and_plain() {
        let line = LogLine {
            level: Some(Level::Warn),
            tag: "TOYS".into(),
            timestamp_ms: 2000,
            text: "short".into(),
        };
        assert_eq!(line.render(), "W (2000) TOYS: short");

        let plain = LogLine { level: None, ..line };
        assert_eq!(plain.render(), "short");
    }

    #[test]
    fn test_timestamps_follow_delays() {
        let mut s = session();
        {
            let mut c = s.console("T");
            c.info("a");
            c.delay(1000);
            c.warn("b");
            c.delay(250);
            c.error("c");
        }
        let stamps: Vec<u64> = s.transcript().iter().map(|l| l.timestamp_ms).collect();
        assert_eq!(stamps, vec![0, 1000, 1250]);
        assert_eq!(s.count(Level::Warn), 1);
        assert_eq!(s.count(Level::Error), 1);
    }

    #[test]
    fn test_newlines_split_into_lines() {
        let mut s = session();
        s.console("T").info("\nheading");
        let lines = s.transcript();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "");
        assert_eq!(lines[1].text, "heading");
        assert_eq!(lines[1].level, Some(Level::Info));
    }

    #[test]
    fn test_plain_and_blank() {
        let mut s = session();
        {
            let mut c = s.console("T");
            c.blank();
            c.plain("🍬🍬");
        }
        assert_eq!(s.transcript()[0].render(), "I (0) T: ");
        assert_eq!(s.transcript()[1].render(), "🍬🍬");
        assert!(s.find("🍬").is_some());
    }

    #[test]
    fn test_transcript_serializes() {
        let mut s = session();
        s.console("T").error("boom");
        let json = serde_json::to_string(s.transcript()).unwrap();
        assert!(json.contains("\"level\":\"error\""));
        let back: Vec<LogLine> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s.into_transcript());
    }
}
