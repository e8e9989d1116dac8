use crate::outcome::ErrorCode;
use kidcalc_common::Console;

/// Three lines of console art for an outcome.
pub fn ascii_art(code: ErrorCode) -> [&'static str; 3] {
    match code {
        ErrorCode::None => ["   ✅ SUCCESS ✅", "      🎉🎉🎉", "    All done!"],
        ErrorCode::DivisionByZero => ["   🍕 ÷ 0 = ❌", "   😱 Uh oh!", "  No customers!"],
        ErrorCode::InvalidInput => ["   📝 ABC baht?", "   🤔 Huh...", "  Where's the number?"],
        ErrorCode::OutOfRange => ["   📈 ∞∞∞∞∞", "   😵 Too much!", "  Way too big"],
        _ => ["   ❓ ERROR ❓", "   🔧 Fix it", "  Needs checking"],
    }
}

pub fn show_ascii_art(con: &mut Console<'_>, code: ErrorCode) {
    for line in ascii_art(code) {
        con.info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_art_for_unlisted_codes() {
        assert_eq!(ascii_art(ErrorCode::Overflow), ascii_art(ErrorCode::Underflow));
        assert_ne!(ascii_art(ErrorCode::None), ascii_art(ErrorCode::Overflow));
    }
}
