//! Line-level comment extraction.
//!
//! Returns the parts of a source line that are comment text for a given
//! [`CommentSyntax`]. This is a heuristic, not a lexer:
//!
//! - string literals are tracked with a same-line quote-parity scan, honoring
//!   backslash escapes; nothing spans lines except C block comments
//! - raw strings, triple-quoted strings that span lines, and template
//!   interpolation are not understood
//!
//! The only state carried between lines is whether a `/* ... */` block comment
//! is still open, see [`CarryState`].

use crate::core::tools::CommentSyntax;

/// Scan state carried from one line to the next within a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryState {
    pub in_block_comment: bool,
}

/// Comment text found on one line, plus the state for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub comments: Vec<&'a str>,
    pub carry: CarryState,
}

impl<'a> Extraction<'a> {
    fn new(comments: Vec<&'a str>, carry: CarryState) -> Self {
        Self { comments, carry }
    }
}

/// Extract comment substrings from `line` for `syntax`.
///
/// Only [`CommentSyntax::CStyle`] changes the carry state. [`CommentSyntax::PragmaLine`]
/// reads it: a pragma on a line that starts inside a block comment is not a pragma.
pub fn extract(line: &str, syntax: CommentSyntax, carry: CarryState) -> Extraction<'_> {
    match syntax {
        CommentSyntax::Hash => Extraction::new(hash_comment(line).into_iter().collect(), carry),
        CommentSyntax::CStyle => c_style_comments(line, carry),
        CommentSyntax::HtmlComment => Extraction::new(html_comments(line), carry),
        CommentSyntax::PragmaLine => {
            let comments = if !carry.in_block_comment && is_pragma_line(line) {
                vec![line]
            } else {
                Vec::new()
            };
            Extraction::new(comments, carry)
        }
    }
}

/// Text after the first `#` that is neither escaped nor inside a quoted string.
fn hash_comment(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' {
            i += 2;
            continue;
        }
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'#' => return Some(&line[i + 1..]),
                _ => {}
            },
        }
        i += 1;
    }

    None
}

fn c_style_comments(line: &str, carry: CarryState) -> Extraction<'_> {
    let bytes = line.as_bytes();
    let mut comments = Vec::new();
    let mut i = 0;

    if carry.in_block_comment {
        match line.find("*/") {
            Some(end) => {
                comments.push(&line[..end]);
                i = end + 2;
            }
            None => return Extraction::new(vec![line], carry),
        }
    }

    while i < bytes.len() {
        let rest = &bytes[i..];

        if rest.starts_with(b"//") {
            comments.push(&line[i + 2..]);
            break;
        }

        if rest.starts_with(b"/*") {
            let start = i + 2;
            match line[start..].find("*/") {
                Some(len) => {
                    comments.push(&line[start..start + len]);
                    i = start + len + 2;
                    continue;
                }
                None => {
                    comments.push(&line[start..]);
                    return Extraction::new(
                        comments,
                        CarryState {
                            in_block_comment: true,
                        },
                    );
                }
            }
        }

        if bytes[i] == b'"' || bytes[i] == b'\'' {
            i = skip_c_literal(bytes, i + 1, bytes[i]);
        }
        i += 1;
    }

    Extraction::new(comments, CarryState::default())
}

/// Index of the closing quote of a string or char literal starting at `i`,
/// or a position at or past the end of the line if it never closes.
fn skip_c_literal(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => break,
            _ => i += 1,
        }
    }
    i
}

/// Body of a line that is entirely one `<!-- ... -->` comment once trimmed.
/// Inline comments inside prose and unterminated openers are not comments.
fn html_comments(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    trimmed
        .strip_prefix("<!--")
        .and_then(|rest| rest.strip_suffix("-->"))
        .map(|body| vec![body])
        .unwrap_or_default()
}

fn is_pragma_line(line: &str) -> bool {
    line.trim_start()
        .strip_prefix('#')
        .map(str::trim_start)
        .and_then(|rest| rest.get(..6))
        .is_some_and(|word| word.eq_ignore_ascii_case("pragma"))
}
