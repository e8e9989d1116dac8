/// `count` copies of `glyph`, with negative counts drawing nothing.
pub(crate) fn repeat_glyph(glyph: &str, count: i64) -> String {
    glyph.repeat(count.max(0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_glyph() {
        assert_eq!(repeat_glyph("🥚", 3), "🥚🥚🥚");
        assert_eq!(repeat_glyph("🥚", 0), "");
        assert_eq!(repeat_glyph("🥚", -2), "");
    }
}
