//! Analysis response formatter
//!
//! Pure text → HTML-fragment pipeline applied to analysis responses before
//! they reach the view. The backend hands back LLM output that is often a
//! JSON-encoded string with escaped newlines/unicode and a small markdown
//! subset (headings, bold, dash lists).
//!
//! The pipeline is a fixed sequence: unwrap a JSON string literal, unescape
//! `\n` and `\uXXXX`, then convert the markdown subset over a line-tagged
//! intermediate form. Tagging lines before materializing `<br>` elements is
//! what keeps multi-line constructs (list runs) grouped correctly.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref UNICODE_ESCAPE_RE: Regex = Regex::new(r"\\u[0-9A-Fa-f]{4}").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
}

/// Format an analysis response into an HTML fragment.
pub fn format_response(response_text: &str) -> String {
    let text = unwrap_json_string_literal(response_text);
    let text = text.replace("\\n", "\n");
    let text = decode_unicode_escapes(&text);

    let lines: Vec<Line> = text.split('\n').map(tag_line).collect();
    render_blocks(&lines)
}

/// If the whole input is a JSON-encoded string literal, decode it.
/// Anything that fails to parse is passed through unchanged.
fn unwrap_json_string_literal(text: &str) -> String {
    if text.starts_with('"') && text.ends_with('"') {
        if let Ok(decoded) = serde_json::from_str::<String>(text) {
            return decoded;
        }
    }
    text.to_string()
}

/// Decode `\uXXXX` escapes (exactly 4 hex digits) into characters.
///
/// Escapes naming a UTF-16 surrogate (D800-DFFF) have no char equivalent
/// and are left verbatim, as are malformed escapes the pattern never
/// matches.
fn decode_unicode_escapes(text: &str) -> String {
    UNICODE_ESCAPE_RE
        .replace_all(text, |caps: &Captures| {
            let hex = &caps[0][2..];
            match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// A single input line, tagged by block role.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Heading(u8, String),
    ListItem(String),
    Plain(String),
}

/// Classify one line. Level 3 is checked first so `### x` is never read as
/// a shorter marker; a marker with no content after the space stays plain.
fn tag_line(line: &str) -> Line {
    for (marker, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(marker) {
            if !rest.is_empty() {
                return Line::Heading(level, rest.to_string());
            }
        }
    }
    if let Some(rest) = line.strip_prefix("- ") {
        if !rest.is_empty() {
            return Line::ListItem(rest.to_string());
        }
    }
    Line::Plain(line.to_string())
}

/// Non-greedy `**text**` spans; an unmatched `**` produces no markup.
fn apply_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Render tagged lines into the final fragment.
///
/// A maximal run of list items becomes one `<ul>` and swallows its own line
/// boundaries; every other block boundary becomes a `<br>`. Consecutive
/// break pairs then collapse, so blank lines render as a single break.
fn render_blocks(lines: &[Line]) -> String {
    let mut out = String::new();
    let mut i = 0;

    while i < lines.len() {
        match &lines[i] {
            Line::ListItem(_) => {
                out.push_str("<ul>");
                while let Some(Line::ListItem(item)) = lines.get(i) {
                    out.push_str("<li>");
                    out.push_str(&apply_bold(item));
                    out.push_str("</li>");
                    i += 1;
                }
                out.push_str("</ul>");
            }
            Line::Heading(level, text) => {
                out.push_str(&format!("<h{lvl}>{}</h{lvl}>", apply_bold(text), lvl = level));
                i += 1;
                if i < lines.len() {
                    out.push_str("<br>");
                }
            }
            Line::Plain(text) => {
                out.push_str(&apply_bold(text));
                i += 1;
                if i < lines.len() {
                    out.push_str("<br>");
                }
            }
        }
    }

    out.replace("<br><br>", "<br>")
}
