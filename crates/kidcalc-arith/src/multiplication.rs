//! Multiplication as repeated addition, told with bags of candy.

use crate::picture::repeat_glyph;
use kidcalc_common::{Console, Demo, DemoInfo};
use serde::{Deserialize, Serialize};

pub const TAG: &str = "CANDY_PROJECT";

const CANDY: &str = "🍬";

/// Pause between multiplication table rows.
const TABLE_ROW_DELAY_MS: u64 = 300;

/// Inputs for the candy lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplicationConfig {
    pub candies_per_bag: i64,
    pub strawberry_bags: i64,
    pub orange_bags: i64,
    pub grape_bags: i64,
    /// Friends the candies are shared between.
    pub friends: i64,
}

impl Default for MultiplicationConfig {
    fn default() -> Self {
        MultiplicationConfig {
            candies_per_bag: 6,
            strawberry_bags: 3,
            orange_bags: 2,
            grape_bags: 4,
            friends: 12,
        }
    }
}

impl MultiplicationConfig {
    pub fn total_bags(&self) -> i64 {
        self.strawberry_bags + self.orange_bags + self.grape_bags
    }

    pub fn total_candies(&self) -> i64 {
        self.total_bags() * self.candies_per_bag
    }
}

/// `value` added to itself `times` times, written out, and the sum.
///
/// `repeated_addition(3, 6)` is `("6 + 6 + 6 = 18", 18)`.
pub fn repeated_addition(times: i64, value: i64) -> (String, i64) {
    if times <= 0 {
        return ("0".to_string(), 0);
    }
    let terms = vec![value.to_string(); times as usize].join(" + ");
    let sum = times * value;
    (format!("{terms} = {sum}"), sum)
}

/// `(i, i * base)` for `i` in `1..=10`.
pub fn multiplication_table(base: i64) -> Vec<(i64, i64)> {
    (1..=10).map(|i| (i, i * base)).collect()
}

/// Header and picture line for each of `bags` bags holding `per_bag` candies.
pub fn candy_bag_rows(bags: i64, per_bag: i64) -> Vec<(String, String)> {
    (1..=bags)
        .map(|i| {
            (
                format!("   bag {i}: "),
                format!("      {} ({per_bag} candies)", repeat_glyph(CANDY, per_bag)),
            )
        })
        .collect()
}

/// An even split with a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    pub each: i64,
    pub leftover: i64,
}

/// Split `total` between `friends`; `None` when there is nobody to share with.
pub fn share(total: i64, friends: i64) -> Option<Share> {
    if friends <= 0 {
        return None;
    }
    Some(Share {
        each: total / friends,
        leftover: total % friends,
    })
}

#[derive(Debug, Clone, Default)]
pub struct MultiplicationDemo {
    config: MultiplicationConfig,
}

impl MultiplicationDemo {
    pub fn new(config: MultiplicationConfig) -> Self {
        MultiplicationDemo { config }
    }

    fn show_candy_bags(&self, con: &mut Console<'_>, bags: i64) {
        for (header, picture) in candy_bag_rows(bags, self.config.candies_per_bag) {
            con.info(header);
            con.plain(picture);
        }
    }

    fn show_repeated_addition(&self, con: &mut Console<'_>, times: i64) {
        con.info("🔄 Repeated addition:");
        let (row, _) = repeated_addition(times, self.config.candies_per_bag);
        con.plain(format_args!("      {row}"));
    }

    fn show_multiplication_table(&self, con: &mut Console<'_>) {
        let base = self.config.candies_per_bag;
        con.info(format_args!("📊 Multiplication table of {base}:"));
        for (i, product) in multiplication_table(base) {
            con.info(format_args!("   {i} × {base} = {product}"));
            con.delay(TABLE_ROW_DELAY_MS);
        }
    }

    fn share_candies(&self, con: &mut Console<'_>, total: i64) {
        let friends = self.config.friends;
        match share(total, friends) {
            Some(split) => {
                con.info(format_args!("👥 Sharing with {friends} friends:"));
                con.info(format_args!("   {} candies each", split.each));
                con.info(format_args!("   {} left over", split.leftover));
            }
            None => {
                con.error(format_args!(
                    "cannot share between {friends} friends, need at least one"
                ));
            }
        }
    }
}

impl Demo for MultiplicationDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            id: "multiplication",
            title: "Counting candy",
            tag: TAG,
            concept: "multiplication as repeated addition",
        }
    }

    fn run(&self, con: &mut Console<'_>) {
        let c = &self.config;
        let total_bags = c.total_bags();
        let total_candies = c.total_candies();

        con.info("🍬 Counting candy 🍬");
        con.info("=======================================");
        con.info(format_args!("📦 {total_bags} bags of candy in all (mixed flavours)"));
        con.info(format_args!("   - 🍓 strawberry: {} bags", c.strawberry_bags));
        con.info(format_args!("   - 🍊 orange: {} bags", c.orange_bags));
        con.info(format_args!("   - 🍇 grape: {} bags", c.grape_bags));
        con.info(format_args!("📌 candies per bag: {}", c.candies_per_bag));
        con.info(format_args!(
            "🧮 all candies: {total_bags} × {} = {total_candies}",
            c.candies_per_bag
        ));
        con.blank();

        self.show_candy_bags(con, total_bags);
        self.show_repeated_addition(con, total_bags);
        self.show_multiplication_table(con);
        self.share_candies(con, total_candies);

        con.blank();
        con.info("🎓 Good to know:");
        con.info("   ✅ multiplication is repeated addition");
        if let Some(split) = share(total_candies, c.friends) {
            con.info(format_args!(
                "   ✅ division: {total_candies} ÷ {} = {} (remainder {})",
                c.friends, split.each, split.leftover
            ));
        }
        con.info("   ✅ multiplication is commutative: a × b = b × a");

        con.blank();
        con.info("🎉 End of the candy program!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidcalc_common::{InstantPacer, Level, NullSink, Session};

    #[test]
    fn test_totals() {
        let config = MultiplicationConfig::default();
        assert_eq!(config.total_bags(), 9);
        assert_eq!(config.total_candies(), 54);
    }

    #[test]
    fn test_repeated_addition() {
        assert_eq!(repeated_addition(3, 6), ("6 + 6 + 6 = 18".to_string(), 18));
        assert_eq!(repeated_addition(1, 6), ("6 = 6".to_string(), 6));
        assert_eq!(repeated_addition(0, 6), ("0".to_string(), 0));
    }

    #[test]
    fn test_candy_bag_rows() {
        let rows = candy_bag_rows(2, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "   bag 1: ");
        assert_eq!(rows[1].0, "   bag 2: ");
        assert_eq!(rows[1].1, "      🍬🍬🍬 (3 candies)");
        assert!(candy_bag_rows(0, 6).is_empty());
    }

    #[test]
    fn test_multiplication_table() {
        let table = multiplication_table(6);
        assert_eq!(table.len(), 10);
        assert_eq!(table[0], (1, 6));
        assert_eq!(table[9], (10, 60));
    }

    #[test]
    fn test_share() {
        assert_eq!(share(54, 12), Some(Share { each: 4, leftover: 6 }));
        assert_eq!(share(54, 0), None);
    }

    #[test]
    fn test_run_default() {
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        MultiplicationDemo::default().run(&mut session.console(TAG));

        assert!(session.find("9 × 6 = 54").is_some());
        assert!(session.find("54 ÷ 12 = 4 (remainder 6)").is_some());
        assert!(session.find("10 × 6 = 60").is_some());

        let picture_rows = session
            .transcript()
            .iter()
            .filter(|l| l.level.is_none() && l.text.contains("(6 candies)"))
            .count();
        assert_eq!(picture_rows, 9);

        let sum_row = session.find("6 + 6 + 6 + 6 + 6 + 6 + 6 + 6 + 6 = 54").unwrap();
        assert_eq!(sum_row.level, None);

        assert_eq!(session.elapsed_ms(), 10 * TABLE_ROW_DELAY_MS);
    }

    #[test]
    fn test_run_without_friends_logs_error() {
        let config = MultiplicationConfig {
            friends: 0,
            ..Default::default()
        };
        let mut session = Session::new(Box::new(NullSink), Box::new(InstantPacer::new()));
        MultiplicationDemo::new(config).run(&mut session.console(TAG));

        assert_eq!(session.count(Level::Error), 1);
        assert!(session.find("division:").is_none());
    }
}
