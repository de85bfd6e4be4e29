//! Token classification for JSON syntax highlighting.

use std::sync::LazyLock;

use regex::Regex;

/// Strings (optionally followed by `:`), literals and numbers.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"("(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?)"#,
    )
    .expect("token pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Key,
    String,
    Number,
    Boolean,
    Null,
    /// Punctuation and whitespace between tokens.
    Plain,
}

fn classify(token: &str) -> TokenClass {
    if token.starts_with('"') {
        if token.ends_with(':') {
            TokenClass::Key
        } else {
            TokenClass::String
        }
    } else if token == "true" || token == "false" {
        TokenClass::Boolean
    } else if token == "null" {
        TokenClass::Null
    } else {
        TokenClass::Number
    }
}

/// Split `text` into classified segments that concatenate back to `text`.
pub fn tokenize(text: &str) -> Vec<(TokenClass, &str)> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in TOKEN.find_iter(text) {
        if m.start() > last {
            segments.push((TokenClass::Plain, &text[last..m.start()]));
        }
        segments.push((classify(m.as_str()), m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push((TokenClass::Plain, &text[last..]));
    }
    segments
}
