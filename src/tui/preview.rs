//! Preview pane content: highlighted, optionally wrapped output.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::abi::AbiEntry;
use crate::render::highlight::tokenize;
use crate::render::{summary, OutputStats};
use crate::theme::Theme;

/// Highlight `text` and break it into rows at most `width` columns wide.
///
/// Rows break at the same columns as [`crate::render::wrap::wrap_lines`];
/// a width of zero keeps source lines intact.
pub fn highlight_lines(text: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for source in text.lines() {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;
        let mut row_started = false;
        for (class, segment) in tokenize(source) {
            let style = theme.token_style(class);
            let mut chunk = String::new();
            for c in segment.chars() {
                let w = c.width().unwrap_or(0);
                if width > 0 && row_started && row_width + w > width {
                    if !chunk.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut chunk), style));
                    }
                    lines.push(Line::from(std::mem::take(&mut row)));
                    row_width = 0;
                }
                chunk.push(c);
                row_width += w;
                row_started = true;
            }
            if !chunk.is_empty() {
                row.push(Span::styled(chunk, style));
            }
        }
        lines.push(Line::from(row));
    }
    lines
}

/// Summary lines shown under the preview.
pub fn stats_lines(entries: &[&AbiEntry], rendered: &str) -> Vec<String> {
    let stats = OutputStats::compute(entries, rendered);
    vec![
        summary(entries.iter().copied()),
        stats.selected_line(),
        stats.size_line(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::parse_abi;
    use crate::render::highlight::TokenClass;
    use crate::render::wrap::wrap_lines;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn rows_match_plain_wrapping() {
        let text = "[\n  {\n    \"name\": \"transferFrom\",\n    \"indexed\": false\n  }\n]";
        let theme = Theme::standard();
        for width in [0, 5, 12, 80] {
            let rows: Vec<String> = highlight_lines(text, width, &theme)
                .iter()
                .map(plain)
                .collect();
            assert_eq!(rows, wrap_lines(text, width), "width {}", width);
        }
    }

    #[test]
    fn spans_carry_token_styles() {
        let theme = Theme::standard();
        let lines = highlight_lines(r#"{"a": 1}"#, 0, &theme);
        let key = lines[0]
            .spans
            .iter()
            .find(|s| s.content.contains("\"a\""))
            .unwrap();
        assert_eq!(key.style, theme.token_style(TokenClass::Key));
        let number = lines[0].spans.iter().find(|s| s.content == "1").unwrap();
        assert_eq!(number.style, theme.token_style(TokenClass::Number));
    }

    #[test]
    fn split_token_keeps_style_on_both_rows() {
        let theme = Theme::standard();
        let lines = highlight_lines(r#""abcdef""#, 4, &theme);
        assert_eq!(lines.len(), 2);
        let string_style = theme.token_style(TokenClass::String);
        assert_eq!(lines[0].spans[0].style, string_style);
        assert_eq!(lines[1].spans[0].style, string_style);
    }

    #[test]
    fn stats_lines_describe_selection() {
        let entries = parse_abi(
            r#"[{"type":"function","name":"a","inputs":[]},{"type":"event","name":"E","inputs":[]}]"#,
        )
        .unwrap();
        let refs: Vec<_> = entries.iter().collect();
        let lines = stats_lines(&refs, "abc");
        assert_eq!(
            lines,
            vec![
                "1 function, 1 event".to_string(),
                "Selected: 1 functions, 1 events".to_string(),
                "Size: 0.00KB • Characters: 3".to_string(),
            ]
        );
    }
}
