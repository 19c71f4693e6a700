//! Text helpers shared by the explanatory messages and report output.

/// Render a fraction as a whole-number percentage, e.g. `0.65` -> `"65%"`.
pub fn decimal_to_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Shorten comment text to at most `max_chars` characters, marking the cut with `...`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_to_percent() {
        assert_eq!(decimal_to_percent(0.65), "65%");
        assert_eq!(decimal_to_percent(0.15), "15%");
        assert_eq!(decimal_to_percent(1.0), "100%");
        assert_eq!(decimal_to_percent(0.0), "0%");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Parks need lights", 40), "Parks need lights");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("We should build more bike lanes", 12), "We should...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("あいうえおかきくけこ", 6), "あいう...");
    }
}
