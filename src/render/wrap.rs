//! Display-only soft wrapping.
//!
//! Widths are measured in terminal columns, so wide glyphs count double.

use unicode_width::UnicodeWidthChar;

/// Break every line of `text` into rows at most `width` columns wide.
///
/// A width of zero disables wrapping. A single glyph wider than `width`
/// still gets a row of its own.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.lines() {
        if width == 0 {
            rows.push(line.to_string());
            continue;
        }
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }
    rows
}

/// Wrapped text joined with newlines.
pub fn soft_wrap(text: &str, width: usize) -> String {
    wrap_lines(text, width).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(soft_wrap("abc\ndef", 10), "abc\ndef");
    }

    #[test]
    fn long_lines_break_at_width() {
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(wrap_lines("日本語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(soft_wrap("abcdefgh", 0), "abcdefgh");
    }

    #[test]
    fn empty_lines_are_kept() {
        assert_eq!(wrap_lines("a\n\nb", 5), vec!["a", "", "b"]);
    }

    #[test]
    fn content_is_preserved() {
        let text = "[\n  \"function transfer(address to, uint256 amount) returns (bool)\"\n]";
        let rejoined: String = wrap_lines(text, 7).concat();
        assert_eq!(rejoined, text.replace('\n', ""));
    }
}
