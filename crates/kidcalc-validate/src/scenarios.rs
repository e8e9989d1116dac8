//! Scripted scenarios that exercise the validators.
//!
//! Each scenario tells a short story, calls validators with good and bad
//! inputs, and returns the outcomes in call order.

use crate::outcome::Outcome;
use crate::validators::{
    calculate_interest, safe_divide, validate_email, validate_money, validate_national_id,
    validate_number, validate_phone_number,
};
use kidcalc_common::Console;

/// Pause after each step inside a scenario.
pub const STEP_DELAY_MS: u64 = 2000;

/// Rainy day at the pizza shop: sharing slices between no customers.
pub fn pizza_shop(con: &mut Console<'_>) -> Vec<Outcome> {
    con.info("\n🍕 === Pizza shop ===");
    con.info("📖 It's raining and nobody came to eat");

    let mut outcomes = Vec::with_capacity(3);

    outcomes.push(safe_divide(con, 12.0, 4.0, "12 slices for 4 customers"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(safe_divide(con, 12.0, 0.0, "12 slices for 0 customers"));
    con.delay(STEP_DELAY_MS);

    con.info("\n🌞 The rain stopped! 3 customers came in");
    outcomes.push(safe_divide(con, 12.0, 3.0, "12 slices for 3 customers"));

    outcomes
}

/// The shopkeeper types prices and change in wrong.
pub fn corner_shop(con: &mut Console<'_>) -> Vec<Outcome> {
    con.info("\n🛒 === Corner shop ===");
    con.info("📖 The shopkeeper typed something wrong");

    let mut outcomes = Vec::with_capacity(4);

    outcomes.push(validate_number(con, "ABC", "product price"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(validate_number(con, "12.50", "product price"));
    con.delay(1000);

    outcomes.push(validate_money(con, -50.0, "change"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(validate_money(con, 25.75, "change"));

    outcomes
}

/// Deposits and interest at the bank.
pub fn bank(con: &mut Console<'_>) -> Vec<Outcome> {
    con.info("\n🏦 === Bank ===");
    con.info("📖 A customer deposits money and asks about interest");

    let mut outcomes = Vec::with_capacity(4);

    outcomes.push(calculate_interest(con, 100_000.0, 2.5, 5));
    con.delay(STEP_DELAY_MS);

    outcomes.push(calculate_interest(con, 100_000.0, -5.0, 5));
    con.delay(STEP_DELAY_MS);

    outcomes.push(validate_money(con, 999_999_999_999.0, "deposit"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(calculate_interest(con, 100_000.0, 3.0, 10));

    outcomes
}

/// Signing up for a library card: email, phone and national ID.
pub fn identity_desk(con: &mut Console<'_>) -> Vec<Outcome> {
    con.info("\n🪪 === Library sign-up desk ===");
    con.info("📖 A new member fills in the form");

    let mut outcomes = Vec::with_capacity(7);

    outcomes.push(validate_email(con, "kid at school"));
    outcomes.push(validate_email(con, "kid@school.ac.th"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(validate_phone_number(con, "08123x5678"));
    outcomes.push(validate_phone_number(con, "0812345678"));
    con.delay(STEP_DELAY_MS);

    outcomes.push(validate_national_id(con, "123456789012"));
    outcomes.push(validate_national_id(con, "1234567890123"));
    outcomes.push(validate_national_id(con, "1234567890121"));

    outcomes
}

/// Tables of error kinds and the principles behind handling them.
pub fn summary(con: &mut Console<'_>) {
    con.info("\n📚 === Error handling summary ===");
    con.info("╔════════════════════════════════════════════╗");
    con.info("║               Kinds of errors              ║");
    con.info("╠════════════════════════════════════════════╣");
    con.info("║ 🚫 Division by zero                        ║");
    con.info("║ 📝 Invalid input - wrong kind of data      ║");
    con.info("║ 📊 Out of range - beyond the limits        ║");
    con.info("║ ➖ Negative value - where it makes no sense ║");
    con.info("║ ⬆️ Overflow - too big to hold              ║");
    con.info("║ ⬇️ Underflow - too small to hold           ║");
    con.info("╚════════════════════════════════════════════╝");

    con.info("\n🛡️ === Principles ===");
    con.info("✅ 1. Check the data before calculating");
    con.info("✅ 2. Show messages people can understand");
    con.info("✅ 3. Suggest how to fix the problem");
    con.info("✅ 4. Never let the program hang or crash");
    con.info("✅ 5. Use enums and structs to carry the status");
}
