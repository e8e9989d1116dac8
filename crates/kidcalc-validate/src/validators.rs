//! Validation routines.
//!
//! Each routine logs a heading and its inputs, then checks its guards in
//! order. The first failing guard decides the outcome; later guards are not
//! evaluated.

use crate::art::show_ascii_art;
use crate::outcome::{ErrorCode, Outcome};
use kidcalc_common::Console;

/// Largest amount of money the system accepts (one trillion baht).
pub const MONEY_LIMIT: f64 = 1_000_000_000_000.0;

/// Amounts further than this from the nearest satang get rounded.
const CENT_TOLERANCE: f64 = 0.001;

/// Interest rates outside `-RATE_LIMIT..=RATE_LIMIT` percent are rejected.
pub const RATE_LIMIT: f64 = 100.0;

pub const MAX_YEARS: i32 = 100;

const NATIONAL_ID_LEN: usize = 13;
const PHONE_LEN: usize = 10;
/// Shortest acceptable email, in bytes.
const MIN_EMAIL_LEN: usize = 5;

fn hint(con: &mut Console<'_>, text: &str) {
    con.info(format_args!("💡 Tip: {text}"));
}

fn report(con: &mut Console<'_>, outcome: &Outcome) {
    if outcome.is_ok() {
        con.info(&outcome.message);
    } else {
        con.error(&outcome.message);
    }
}

/// Divide, refusing a zero divisor and flagging results that blow up or vanish.
pub fn safe_divide(con: &mut Console<'_>, dividend: f64, divisor: f64, context: &str) -> Outcome {
    con.info(format_args!("\n🔍 Checking division: {context}"));
    con.info(format_args!("📊 {dividend} ÷ {divisor} = ?"));

    if divisor == 0.0 {
        let outcome = Outcome::fail(
            ErrorCode::DivisionByZero,
            "❌ Error: cannot divide by zero!",
        );
        report(con, &outcome);
        show_ascii_art(con, ErrorCode::DivisionByZero);
        hint(con, "check how many customers there are before sharing the pizza");
        return outcome;
    }

    let quotient = dividend / divisor;
    if quotient.is_infinite() {
        let outcome = Outcome::fail(ErrorCode::Overflow, "⚠️ Warning: the result is infinite!")
            .with_value(quotient);
        con.warn(&outcome.message);
        return outcome;
    }

    if quotient == 0.0 && dividend != 0.0 && dividend.is_finite() {
        let outcome = Outcome::fail(
            ErrorCode::Underflow,
            "⚠️ Warning: the result is too small to represent and became zero!",
        );
        con.warn(&outcome.message);
        return outcome;
    }

    let outcome = Outcome::ok(
        quotient,
        format!("✅ Success: {dividend:.2} ÷ {divisor:.2} = {quotient:.2}"),
    );
    report(con, &outcome);
    show_ascii_art(con, ErrorCode::None);
    outcome
}

/// Check an amount of money: not negative, not absurdly large, whole satang.
///
/// Amounts with more than two decimal places are rounded with a warning and
/// the rounded amount is returned.
pub fn validate_money(con: &mut Console<'_>, amount: f64, description: &str) -> Outcome {
    con.info(format_args!("\n💰 Checking money: {description}"));
    con.info(format_args!("💵 Amount: {amount:.2} baht"));

    if amount.is_nan() {
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Error: the amount is not a number!");
        report(con, &outcome);
        return outcome;
    }

    if amount < 0.0 {
        let outcome = Outcome::fail(
            ErrorCode::NegativeValue,
            "❌ Error: an amount of money cannot be negative!",
        );
        report(con, &outcome);
        hint(con, "work the sum out again");
        return outcome;
    }

    if amount > MONEY_LIMIT {
        let outcome = Outcome::fail(
            ErrorCode::OutOfRange,
            "⚠️ Warning: the amount is over the system limit!",
        );
        con.warn(&outcome.message);
        show_ascii_art(con, ErrorCode::OutOfRange);
        hint(con, "this needs the central bank");
        return outcome;
    }

    let rounded = (amount * 100.0).round() / 100.0;
    let amount = if (amount - rounded).abs() > CENT_TOLERANCE {
        con.warn(format_args!(
            "⚠️ Warning: rounding {amount:.4} to {rounded:.2} baht"
        ));
        rounded
    } else {
        amount
    };

    let outcome = Outcome::ok(amount, format!("✅ Amount is valid: {amount:.2} baht"));
    report(con, &outcome);
    outcome
}

/// Parse a typed-in number.
///
/// Leading whitespace is skipped; anything else that is not part of the
/// number makes the input invalid.
pub fn validate_number(con: &mut Console<'_>, input: &str, field_name: &str) -> Outcome {
    con.info(format_args!("\n🔢 Checking number: {field_name}"));
    con.info(format_args!("📝 Input: '{input}'"));

    if input.is_empty() {
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Error: no data!");
        report(con, &outcome);
        return outcome;
    }

    let value = match input.trim_start().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            let outcome = Outcome::fail(
                ErrorCode::InvalidInput,
                format!("❌ Error: '{input}' is not a number!"),
            );
            report(con, &outcome);
            show_ascii_art(con, ErrorCode::InvalidInput);
            hint(con, "use only the digits 0-9 and a decimal point");
            return outcome;
        }
    };

    if !value.is_finite() {
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Error: not a usable number!");
        report(con, &outcome);
        return outcome;
    }

    let outcome = Outcome::ok(value, format!("✅ Number is valid: {value:.2}"));
    report(con, &outcome);
    outcome
}

/// Simple interest: `principal + principal * rate / 100 * years`.
pub fn calculate_interest(con: &mut Console<'_>, principal: f64, rate: f64, years: i32) -> Outcome {
    con.info("\n🏦 Calculating interest");
    con.info(format_args!("💰 Principal: {principal:.2} baht"));
    con.info(format_args!("📈 Rate: {rate:.2}% per year"));
    con.info(format_args!("⏰ Term: {years} years"));

    if principal.is_nan() || principal <= 0.0 {
        let outcome = Outcome::fail(
            ErrorCode::NegativeValue,
            "❌ The principal must be greater than zero!",
        );
        report(con, &outcome);
        return outcome;
    }

    if !(-RATE_LIMIT..=RATE_LIMIT).contains(&rate) {
        let outcome = Outcome::fail(ErrorCode::OutOfRange, "❌ That interest rate makes no sense!");
        report(con, &outcome);
        hint(con, "use a rate between -100% and 100%");
        return outcome;
    }

    if !(0..=MAX_YEARS).contains(&years) {
        let outcome = Outcome::fail(ErrorCode::OutOfRange, "❌ That term makes no sense!");
        report(con, &outcome);
        return outcome;
    }

    let interest = principal * (rate / 100.0) * years as f64;
    let total = principal + interest;

    if total > f64::MAX / 2.0 {
        let outcome = Outcome::fail(ErrorCode::Overflow, "⚠️ Warning: the result is too large!");
        con.warn(&outcome.message);
        return outcome;
    }

    let outcome = Outcome::ok(
        total,
        format!("✅ Interest: {interest:.2} baht, total: {total:.2} baht"),
    );
    report(con, &outcome);
    outcome
}

/// A loose shape check: long enough, has `@` and `.`, no spaces.
pub fn validate_email(con: &mut Console<'_>, email: &str) -> Outcome {
    con.info(format_args!("\n📧 Checking email: {email}"));

    let well_formed = email.len() >= MIN_EMAIL_LEN
        && email.contains('@')
        && email.contains('.')
        && !email.contains(' ');
    let outcome = if well_formed {
        Outcome::ok(0.0, "✅ Email is valid")
    } else {
        Outcome::fail(ErrorCode::InvalidInput, "❌ Email format is invalid!")
    };
    report(con, &outcome);
    outcome
}

/// A Thai phone number: ten digits starting with `0`.
pub fn validate_phone_number(con: &mut Console<'_>, phone: &str) -> Outcome {
    con.info(format_args!("\n📞 Checking phone number: {phone}"));

    if phone.len() != PHONE_LEN || !phone.starts_with('0') {
        let outcome = Outcome::fail(
            ErrorCode::InvalidInput,
            "❌ Invalid phone number (needs 10 digits starting with 0)",
        );
        report(con, &outcome);
        return outcome;
    }

    if !phone.bytes().all(|b| b.is_ascii_digit()) {
        let outcome = Outcome::fail(
            ErrorCode::InvalidInput,
            "❌ A phone number may only contain digits",
        );
        report(con, &outcome);
        return outcome;
    }

    let outcome = Outcome::ok(0.0, "✅ Phone number is valid");
    report(con, &outcome);
    outcome
}

/// Check digit for the first twelve digits of a Thai national ID.
///
/// Digit `i` (0-based) is weighted `13 - i`; the check digit is
/// `(11 - sum % 11) % 10`. Returns `None` if `first12` is not twelve ASCII
/// digits.
pub fn national_id_check_digit(first12: &[u8]) -> Option<u8> {
    if first12.len() != NATIONAL_ID_LEN - 1 || !first12.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let sum: u32 = first12
        .iter()
        .enumerate()
        .map(|(i, &b)| u32::from(b - b'0') * (NATIONAL_ID_LEN - i) as u32)
        .sum();
    Some(((11 - sum % 11) % 10) as u8)
}

/// A Thai national ID: thirteen digits, the last one a checksum.
pub fn validate_national_id(con: &mut Console<'_>, id: &str) -> Outcome {
    con.info(format_args!("\n🆔 Checking national ID: {id}"));

    let bytes = id.as_bytes();
    if bytes.len() != NATIONAL_ID_LEN {
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Must be 13 digits");
        report(con, &outcome);
        return outcome;
    }

    let (body, last) = bytes.split_at(NATIONAL_ID_LEN - 1);
    let Some(expected) = national_id_check_digit(body) else {
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Must contain only digits");
        report(con, &outcome);
        return outcome;
    };

    if last[0] != b'0' + expected {
        tracing::debug!(id, expected, "national id checksum mismatch");
        let outcome = Outcome::fail(ErrorCode::InvalidInput, "❌ Checksum does not match");
        report(con, &outcome);
        return outcome;
    }

    let outcome = Outcome::ok(0.0, "✅ National ID is valid");
    report(con, &outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kidcalc_common::{InstantPacer, Level, NullSink, Session};

    fn session() -> Session {
        Session::new(Box::new(NullSink), Box::new(InstantPacer::new()))
    }

    #[test]
    fn test_safe_divide_ok() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), 12.0, 4.0, "pizza");
        assert_eq!(outcome.error, ErrorCode::None);
        assert_eq!(outcome.value, 3.0);
        assert!(s.find("12.00 ÷ 4.00 = 3.00").is_some());
        assert!(s.find("SUCCESS").is_some());
    }

    #[test]
    fn test_safe_divide_by_zero() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), 12.0, 0.0, "pizza");
        assert_eq!(outcome.error, ErrorCode::DivisionByZero);
        assert_eq!(outcome.value, 0.0);
        assert_eq!(s.count(Level::Error), 1);
        assert!(s.find("Tip:").is_some());
    }

    #[test]
    fn test_safe_divide_zero_by_zero_is_division_by_zero() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), 0.0, 0.0, "nothing");
        assert_eq!(outcome.error, ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_safe_divide_overflow() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), f64::MAX, 0.5, "huge");
        assert_eq!(outcome.error, ErrorCode::Overflow);
        assert!(outcome.value.is_infinite());
        assert_eq!(s.count(Level::Warn), 1);
    }

    #[test]
    fn test_safe_divide_underflow() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), 1e-300, 1e300, "tiny");
        assert_eq!(outcome.error, ErrorCode::Underflow);
    }

    #[test]
    fn test_safe_divide_zero_dividend_is_fine() {
        let mut s = session();
        let outcome = safe_divide(&mut s.console("T"), 0.0, 5.0, "no slices");
        assert!(outcome.is_ok());
        assert_eq!(outcome.value, 0.0);
    }

    #[test]
    fn test_money_negative() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), -50.0, "change");
        assert_eq!(outcome.error, ErrorCode::NegativeValue);
    }

    #[test]
    fn test_money_negative_checked_before_range() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), -5e12, "change");
        assert_eq!(outcome.error, ErrorCode::NegativeValue);
    }

    #[test]
    fn test_money_out_of_range() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), 2e12, "deposit");
        assert_eq!(outcome.error, ErrorCode::OutOfRange);
        assert_eq!(s.count(Level::Warn), 1);
        assert_eq!(s.count(Level::Error), 0);
    }

    #[test]
    fn test_money_at_limit_is_ok() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), MONEY_LIMIT, "deposit");
        assert!(outcome.is_ok());
        let outcome = validate_money(&mut s.console("T"), 999_999_999_999.0, "deposit");
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_money_rounds_to_cents() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), 25.756, "change");
        assert!(outcome.is_ok());
        assert_relative_eq!(outcome.value, 25.76);
        assert!(s.find("rounding 25.7560 to 25.76").is_some());
    }

    #[test]
    fn test_money_exact_cents_untouched() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), 25.75, "change");
        assert_eq!(outcome.value, 25.75);
        assert_eq!(s.count(Level::Warn), 0);
    }

    #[test]
    fn test_money_nan() {
        let mut s = session();
        let outcome = validate_money(&mut s.console("T"), f64::NAN, "change");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_number_empty() {
        let mut s = session();
        let outcome = validate_number(&mut s.console("T"), "", "price");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
        assert!(s.find("no data").is_some());
        // Empty input is reported without the art
        assert!(s.find("ABC baht?").is_none());
    }

    #[test]
    fn test_number_not_numeric() {
        let mut s = session();
        let outcome = validate_number(&mut s.console("T"), "ABC", "price");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
        assert!(s.find("'ABC' is not a number").is_some());
        assert!(s.find("ABC baht?").is_some());
    }

    #[test]
    fn test_number_trailing_garbage() {
        let mut s = session();
        let outcome = validate_number(&mut s.console("T"), "12.5x", "price");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
        let outcome = validate_number(&mut s.console("T"), "12.5 ", "price");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_number_valid() {
        let mut s = session();
        let outcome = validate_number(&mut s.console("T"), "12.50", "price");
        assert_eq!(outcome.into_result(), Ok(12.5));
        let outcome = validate_number(&mut s.console("T"), "  -3e2", "price");
        assert_eq!(outcome.into_result(), Ok(-300.0));
    }

    #[test]
    fn test_number_not_finite() {
        let mut s = session();
        for input in ["inf", "NaN", "1e400"] {
            let outcome = validate_number(&mut s.console("T"), input, "price");
            assert_eq!(outcome.error, ErrorCode::InvalidInput, "input {input}");
        }
        assert!(s.find("not a usable number").is_some());
    }

    #[test]
    fn test_interest_ok() {
        let mut s = session();
        let outcome = calculate_interest(&mut s.console("T"), 100_000.0, 2.5, 5);
        assert!(outcome.is_ok());
        assert_relative_eq!(outcome.value, 112_500.0);
        assert!(s.find("Interest: 12500.00 baht, total: 112500.00 baht").is_some());
    }

    #[test]
    fn test_interest_negative_rate_within_range() {
        let mut s = session();
        let outcome = calculate_interest(&mut s.console("T"), 100_000.0, -5.0, 5);
        assert!(outcome.is_ok());
        assert_relative_eq!(outcome.value, 75_000.0);
    }

    #[test]
    fn test_interest_guards_in_order() {
        let mut s = session();
        let outcome = calculate_interest(&mut s.console("T"), 0.0, 500.0, 500);
        assert_eq!(outcome.error, ErrorCode::NegativeValue);

        let outcome = calculate_interest(&mut s.console("T"), 1.0, 500.0, 500);
        assert_eq!(outcome.error, ErrorCode::OutOfRange);
        assert!(outcome.message.contains("rate"));

        let outcome = calculate_interest(&mut s.console("T"), 1.0, 5.0, 101);
        assert_eq!(outcome.error, ErrorCode::OutOfRange);
        assert!(outcome.message.contains("term"));

        let outcome = calculate_interest(&mut s.console("T"), 1.0, 5.0, -1);
        assert_eq!(outcome.error, ErrorCode::OutOfRange);
    }

    #[test]
    fn test_interest_overflow() {
        let mut s = session();
        let outcome = calculate_interest(&mut s.console("T"), f64::MAX / 1.5, 10.0, 10);
        assert_eq!(outcome.error, ErrorCode::Overflow);
    }

    #[test]
    fn test_email() {
        let mut s = session();
        assert!(validate_email(&mut s.console("T"), "kid@school.ac.th").is_ok());
        for bad in ["a@b", "no-at-sign.com", "noat@dot", "a b@c.de"] {
            let outcome = validate_email(&mut s.console("T"), bad);
            assert_eq!(outcome.error, ErrorCode::InvalidInput, "email {bad}");
        }
    }

    #[test]
    fn test_email_length_counts_bytes() {
        let mut s = session();
        // four characters, five bytes
        assert!(validate_email(&mut s.console("T"), "é@.c").is_ok());
        let outcome = validate_email(&mut s.console("T"), "e@.c");
        assert_eq!(outcome.error, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_phone() {
        let mut s = session();
        assert!(validate_phone_number(&mut s.console("T"), "0812345678").is_ok());

        let outcome = validate_phone_number(&mut s.console("T"), "812345678");
        assert!(outcome.message.contains("10 digits"));
        let outcome = validate_phone_number(&mut s.console("T"), "1812345678");
        assert!(outcome.message.contains("10 digits"));
        let outcome = validate_phone_number(&mut s.console("T"), "08123x5678");
        assert!(outcome.message.contains("only contain digits"));
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(national_id_check_digit(b"123456789012"), Some(1));
        assert_eq!(national_id_check_digit(b"110170023070"), Some(8));
        assert_eq!(national_id_check_digit(b"12345678901"), None);
        assert_eq!(national_id_check_digit(b"12345678901a"), None);
    }

    #[test]
    fn test_national_id() {
        let mut s = session();
        assert!(validate_national_id(&mut s.console("T"), "1234567890121").is_ok());
        assert!(validate_national_id(&mut s.console("T"), "1101700230708").is_ok());

        let outcome = validate_national_id(&mut s.console("T"), "1234567890123");
        assert!(outcome.message.contains("Checksum"));
        let outcome = validate_national_id(&mut s.console("T"), "123456789012");
        assert!(outcome.message.contains("13 digits"));
        let outcome = validate_national_id(&mut s.console("T"), "12345A7890121");
        assert!(outcome.message.contains("only digits"));
        let outcome = validate_national_id(&mut s.console("T"), "123456789012X");
        assert!(outcome.message.contains("Checksum"));
    }
}
