//! Addition: mom already has some eggs and the hens laid a few more.

use crate::picture::repeat_glyph;
use kidcalc_common::{Console, Demo, DemoInfo};
use serde::{Deserialize, Serialize};

pub const TAG: &str = "EGGS_MATH";

const EGG: &str = "🥚";

/// Inputs for the egg-counting lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionConfig {
    /// Eggs mom already had.
    pub eggs_have: i64,
    /// Eggs laid this morning.
    pub eggs_new: i64,
    /// Extra `(have, new)` pairs worked through after the main problem.
    pub examples: Vec<(i64, i64)>,
}

impl Default for AdditionConfig {
    fn default() -> Self {
        AdditionConfig {
            eggs_have: 4,
            eggs_new: 2,
            examples: vec![(7, 3), (10, 5)],
        }
    }
}

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[derive(Debug, Clone, Default)]
pub struct AdditionDemo {
    config: AdditionConfig,
}

impl AdditionDemo {
    pub fn new(config: AdditionConfig) -> Self {
        AdditionDemo { config }
    }
}

impl Demo for AdditionDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            id: "addition",
            title: "Counting mom's eggs",
            tag: TAG,
            concept: "addition",
        }
    }

    fn run(&self, con: &mut Console<'_>) {
        let have = self.config.eggs_have;
        let new = self.config.eggs_new;

        con.info("🥚 Counting mom's eggs 🥚");
        con.info("=====================================");

        con.info("📖 Problem:");
        con.info(format_args!("   Mom already has: {have} eggs"));
        con.info(format_args!("   The hens laid this morning: {new} eggs"));
        con.info("   ❓ How many eggs does mom have today?");
        con.blank();

        con.delay(3000);

        let total = add(have, new);
        tracing::debug!(have, new, total, "eggs added");

        con.info("🧮 Working it out:");
        con.info("   eggs we had + new eggs");
        con.info(format_args!("   = {have} + {new}"));
        con.info(format_args!("   = {total} eggs"));
        con.blank();

        con.info("✅ Answer:");
        con.info(format_args!("   Mom has {total} eggs today"));
        con.blank();

        con.info("🎨 Picture:");
        con.info(format_args!("   old eggs: {} ({have} eggs)", repeat_glyph(EGG, have)));
        con.info(format_args!("   new eggs: {} ({new} eggs)", repeat_glyph(EGG, new)));
        con.info(format_args!("   total:    {} ({total} eggs)", repeat_glyph(EGG, total)));
        con.blank();

        con.info("💡 More examples:");
        for &(old, fresh) in &self.config.examples {
            con.info(format_args!("   If mom has {old} eggs and the hens lay {fresh}"));
            con.info(format_args!(
                "   she gets {old} + {fresh} = {} eggs",
                add(old, fresh)
            ));
            con.blank();
        }

        con.info("📚 What we learned:");
        con.info("   1. Addition: a + b = c");
        con.info("   2. Variables hold values");
        con.info("   3. Printing results to the log");
        con.info("   4. Solving a problem step by step");
        con.blank();

        con.info("🎉 End of the egg counting program!");
        con.info("📖 Next up: subtraction (toys)");

        con.delay(2000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidcalc_common::{InstantPacer, Level, NullSink, Session};

    #[test]
    fn test_add() {
        assert_eq!(add(4, 2), 6);
        assert_eq!(add(7, 3), 10);
        assert_eq!(add(10, 5), 15);
    }

    #[test]
    fn test_run_default() {
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        AdditionDemo::default().run(&mut session.console(TAG));

        assert!(session.find("= 4 + 2").is_some());
        assert!(session.find("Mom has 6 eggs today").is_some());
        assert!(session.find("10 + 5 = 15 eggs").is_some());
        assert!(session.find("🥚🥚🥚🥚🥚🥚 (6 eggs)").is_some());
        assert_eq!(session.count(Level::Warn), 0);
        assert_eq!(session.elapsed_ms(), 5000);
    }

    #[test]
    fn test_working_steps_come_after_pause() {
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        AdditionDemo::default().run(&mut session.console(TAG));

        let problem = session.find("How many eggs").unwrap();
        let working = session.find("Working it out").unwrap();
        assert_eq!(problem.timestamp_ms, 0);
        assert_eq!(working.timestamp_ms, 3000);
    }

    #[test]
    fn test_custom_inputs() {
        let config = AdditionConfig {
            eggs_have: 12,
            eggs_new: 30,
            examples: vec![],
        };
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        AdditionDemo::new(config).run(&mut session.console(TAG));
        assert!(session.find("= 42 eggs").is_some());
        assert!(session.find("If mom has").is_none());
    }
}
