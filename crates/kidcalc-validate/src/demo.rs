use crate::outcome::Outcome;
use crate::scenarios;
use kidcalc_common::{Console, Demo, DemoInfo};

pub const TAG: &str = "ERROR_HANDLING";

/// Pause between scenarios.
const SCENARIO_DELAY_MS: u64 = 3000;

/// The error-handling lesson, start to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandlingDemo;

impl Demo for ErrorHandlingDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            id: "error-handling",
            title: "Checking and handling errors",
            tag: TAG,
            concept: "input validation and error codes",
        }
    }

    fn run(&self, con: &mut Console<'_>) {
        con.info("🚀 Starting the error handling program!");
        con.info("🛡️ Checking data and preventing errors\n");

        con.delay(1000);

        let story: [fn(&mut Console<'_>) -> Vec<Outcome>; 4] = [
            scenarios::pizza_shop,
            scenarios::corner_shop,
            scenarios::bank,
            scenarios::identity_desk,
        ];
        for scenario in story {
            let outcomes = scenario(con);
            let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
            tracing::debug!(checks = outcomes.len(), failed, "scenario finished");
            con.delay(SCENARIO_DELAY_MS);
        }

        scenarios::summary(con);

        con.info("\n✅ Done learning about error handling!");
        con.info("🎓 Learned: enums, structs, error codes and input checks");
        con.info("🏆 Now you can write code that is safe and reliable!");
    }
}
