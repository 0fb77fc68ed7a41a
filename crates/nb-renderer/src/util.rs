//! Shared utility functions for markdown parsing.

use pulldown_cmark::HeadingLevel;

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Whether a source line holds nothing but whitespace and quote markers.
pub(crate) fn is_blank_line(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || c == '>')
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H4), 4);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }

    #[test]
    fn test_blank_line() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   \r"));
        assert!(is_blank_line(">"));
        assert!(is_blank_line("> >  "));
        assert!(!is_blank_line("> text"));
        assert!(!is_blank_line("[a]: /url"));
    }
}
