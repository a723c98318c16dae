//! Pure text helpers used by the listing and review components.

/// Hard cap on card descriptions, ellipsis appended when cut. The slice is
/// character-based, not word-aware.
pub fn trim_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Star glyph line for a rating: `rating` filled stars then unfilled ones up
/// to five. Ratings above five are not validated and render extra filled
/// glyphs rather than panicking.
pub fn stars(rating: u8) -> String {
    let filled = rating as usize;
    let mut glyphs = "★".repeat(filled);
    glyphs.push_str(&"☆".repeat(5usize.saturating_sub(filled)));
    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_short_text_unchanged() {
        assert_eq!(trim_text("cosy loft", 100), "cosy loft");
        let exactly_100 = "a".repeat(100);
        assert_eq!(trim_text(&exactly_100, 100), exactly_100);
    }

    #[test]
    fn test_trim_long_text_cut_with_ellipsis() {
        let long = "b".repeat(101);
        let trimmed = trim_text(&long, 100);
        assert_eq!(trimmed, format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn test_trim_counts_characters_not_bytes() {
        let long: String = "é".repeat(120);
        let trimmed = trim_text(&long, 100);
        assert_eq!(trimmed.chars().count(), 103);
        assert!(trimmed.ends_with("..."));
    }

    #[test]
    fn test_stars_full_range() {
        for rating in 0..=5u8 {
            let line = stars(rating);
            assert_eq!(line.chars().filter(|c| *c == '★').count(), rating as usize);
            assert_eq!(
                line.chars().filter(|c| *c == '☆').count(),
                5 - rating as usize
            );
            assert_eq!(line.chars().count(), 5);
        }
    }

    #[test]
    fn test_stars_out_of_range_does_not_panic() {
        assert_eq!(stars(7).chars().filter(|c| *c == '★').count(), 7);
    }
}
