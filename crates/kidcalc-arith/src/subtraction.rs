//! Subtraction: giving toys to friends, and checking there are enough first.

use kidcalc_common::{Console, Demo, DemoInfo};
use serde::{Deserialize, Serialize};

pub const TAG: &str = "TOYS_CHALLENGE";

/// Inputs for the toy lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtractionConfig {
    pub toys_at_home: i64,
    pub toys_to_give: i64,
    pub dolls: i64,
    pub robots: i64,
    pub friends: i64,
    pub toys_per_friend: i64,
    /// Toys on hand for the sharing question.
    pub toys_available: i64,
}

impl Default for SubtractionConfig {
    fn default() -> Self {
        SubtractionConfig {
            toys_at_home: 15,
            toys_to_give: 7,
            dolls: 5,
            robots: 2,
            friends: 10,
            toys_per_friend: 2,
            toys_available: 15,
        }
    }
}

/// Result of trying to give toys away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveAway {
    /// There were enough; `remaining` toys are left.
    Enough { remaining: i64 },
    /// Not enough: nothing is given and the count stays at `remaining`.
    Short { missing: i64, remaining: i64 },
}

impl GiveAway {
    pub fn remaining(self) -> i64 {
        match self {
            GiveAway::Enough { remaining } | GiveAway::Short { remaining, .. } => remaining,
        }
    }
}

pub fn give_away(have: i64, give: i64) -> GiveAway {
    if have >= give {
        GiveAway::Enough {
            remaining: have - give,
        }
    } else {
        GiveAway::Short {
            missing: give - have,
            remaining: have,
        }
    }
}

pub fn total_toys(have: i64, dolls: i64, robots: i64) -> i64 {
    have + dolls + robots
}

/// How many toys a sharing plan needs and how many are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharingPlan {
    pub needed: i64,
    /// Zero when the available toys cover the plan.
    pub shortage: i64,
}

pub fn sharing_plan(friends: i64, per_friend: i64, available: i64) -> SharingPlan {
    let needed = friends * per_friend;
    SharingPlan {
        needed,
        shortage: (needed - available).max(0),
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubtractionDemo {
    config: SubtractionConfig,
}

impl SubtractionDemo {
    pub fn new(config: SubtractionConfig) -> Self {
        SubtractionDemo { config }
    }
}

impl Demo for SubtractionDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            id: "subtraction",
            title: "Toy challenge",
            tag: TAG,
            concept: "subtraction with a sufficiency check",
        }
    }

    fn run(&self, con: &mut Console<'_>) {
        let c = &self.config;

        con.info("🧸 Toy challenge 🧸");
        con.info("========================================");

        con.info("📖 Main problem:");
        con.info(format_args!("   Toys at home: {}", c.toys_at_home));
        con.info(format_args!("   Toys to give to friends: {}", c.toys_to_give));
        con.blank();

        con.delay(2000);

        con.info("🔍 Check before giving:");
        match give_away(c.toys_at_home, c.toys_to_give) {
            GiveAway::Enough { remaining } => {
                con.info("   ✅ There are enough toys");
                con.info(format_args!(
                    "   {} - {} = {remaining} toys left",
                    c.toys_at_home, c.toys_to_give
                ));
            }
            GiveAway::Short { missing, remaining } => {
                con.info(format_args!("   ❌ Not enough toys! {missing} short"));
                con.warn(format_args!(
                    "   Cannot give any away, still {remaining} toys"
                ));
            }
        }
        con.blank();

        con.delay(2000);

        con.info("🧩 Other kinds of toys:");
        let total = total_toys(c.toys_at_home, c.dolls, c.robots);
        con.info(format_args!("   🪆 dolls: {}", c.dolls));
        con.info(format_args!("   🤖 robots: {}", c.robots));
        con.info(format_args!(
            "   🎯 all toys together: {} + {} + {} = {total}",
            c.toys_at_home, c.dolls, c.robots
        ));
        con.blank();

        con.delay(2000);

        con.info("🤔 Think about it:");
        con.info(format_args!(
            "   To give {} friends {} toys each...",
            c.friends, c.toys_per_friend
        ));
        let plan = sharing_plan(c.friends, c.toys_per_friend, c.toys_available);
        con.info(format_args!(
            "   1. toys needed: {} x {} = {}",
            c.friends, c.toys_per_friend, plan.needed
        ));
        if plan.shortage > 0 {
            con.info(format_args!(
                "   2. with {} toys we are short: {} - {} = {}",
                c.toys_available, plan.needed, c.toys_available, plan.shortage
            ));
        } else {
            con.info(format_args!(
                "   2. with {} toys there are enough to share",
                c.toys_available
            ));
        }
        con.blank();

        con.info("🎉 End of the toy challenge!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidcalc_common::{InstantPacer, Level, NullSink, Session};

    #[test]
    fn test_give_away_enough() {
        assert_eq!(give_away(15, 7), GiveAway::Enough { remaining: 8 });
        assert_eq!(give_away(7, 7), GiveAway::Enough { remaining: 0 });
    }

    #[test]
    fn test_give_away_short_keeps_count() {
        let result = give_away(3, 8);
        assert_eq!(
            result,
            GiveAway::Short {
                missing: 5,
                remaining: 3
            }
        );
        assert_eq!(result.remaining(), 3);
    }

    #[test]
    fn test_sharing_plan() {
        assert_eq!(
            sharing_plan(10, 2, 15),
            SharingPlan {
                needed: 20,
                shortage: 5
            }
        );
        assert_eq!(sharing_plan(5, 2, 15).shortage, 0);
    }

    #[test]
    fn test_run_default() {
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        SubtractionDemo::default().run(&mut session.console(TAG));

        assert!(session.find("15 - 7 = 8 toys left").is_some());
        assert!(session.find("15 + 5 + 2 = 22").is_some());
        assert!(session.find("20 - 15 = 5").is_some());
        assert_eq!(session.count(Level::Warn), 0);
        assert_eq!(session.elapsed_ms(), 6000);
    }

    #[test]
    fn test_run_short_warns() {
        let config = SubtractionConfig {
            toys_at_home: 3,
            toys_to_give: 8,
            ..Default::default()
        };
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        SubtractionDemo::new(config).run(&mut session.console(TAG));

        let warning = session.find("still 3 toys").unwrap();
        assert_eq!(warning.level, Some(Level::Warn));
        assert!(session.find("5 short").is_some());
    }
}
