//! Trailing-comment descriptions.
//!
//! A member declared as
//!
//! ```text
//! enum EmailType {
//!     Personal = 1, // for home
//! }
//! ```
//!
//! gets the description `for home`. The lookup works on plain source text,
//! so it is best-effort: it needs the declaration written literally as
//! `Ident = value` and gives up (returns `None`) on anything else.

/// Marker that starts a trailing comment.
const COMMENT_MARKER: &str = "//";

/// Find the trailing comment of `ident = literal` inside the body of `enum type_name`.
///
/// `literal` is the discriminant as written in the source (`1`, `-1`,
/// `0x10`, `1_000`, `1i64`). Only the first line of the enum body that
/// declares the member is looked at. The comment text is trimmed; an empty
/// comment counts as no comment.
pub fn inline_description(
    source: &str,
    type_name: &str,
    ident: &str,
    literal: &str,
) -> Option<String> {
    let declaration = format!("{ident} = {literal}");
    let source = mask(source);

    let line = enum_body(&source, type_name)?
        .find(|line| contains_word(code(line), &declaration))?;
    let (_, comment) = line.split_once(COMMENT_MARKER)?;

    // `/// text` and `//! text` trail the same way as `// text`.
    let comment = comment.trim_start_matches(['/', '!']).trim();
    (!comment.is_empty()).then(|| comment.to_string())
}

#[derive(Clone, Copy)]
enum Lexing {
    Code,
    LineComment,
    BlockComment(usize),
    Str,
}

/// Blank out block comments and string contents, keeping line breaks.
///
/// Braces or `//` inside them then no longer confuse the line scan. Line
/// comments are kept verbatim since they carry the descriptions. Raw strings
/// and char literals are not recognized.
fn mask(source: &str) -> String {
    let mut masked = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut state = Lexing::Code;

    let blank = |ch: char| if ch == '\n' { '\n' } else { ' ' };

    while let Some(ch) = chars.next() {
        state = match (state, ch, chars.peek().copied()) {
            (Lexing::Code, '/', Some('/')) => {
                chars.next();
                masked.push_str("//");
                Lexing::LineComment
            }
            (Lexing::Code, '/', Some('*')) => {
                chars.next();
                masked.push_str("  ");
                Lexing::BlockComment(1)
            }
            (Lexing::Code, '"', _) => {
                masked.push('"');
                Lexing::Str
            }
            (Lexing::LineComment, '\n', _) => {
                masked.push('\n');
                Lexing::Code
            }
            (Lexing::BlockComment(depth), '/', Some('*')) => {
                chars.next();
                masked.push_str("  ");
                Lexing::BlockComment(depth + 1)
            }
            (Lexing::BlockComment(depth), '*', Some('/')) => {
                chars.next();
                masked.push_str("  ");
                match depth {
                    1 => Lexing::Code,
                    _ => Lexing::BlockComment(depth - 1),
                }
            }
            (Lexing::Str, '\\', Some(escaped)) => {
                chars.next();
                masked.push(' ');
                masked.push(blank(escaped));
                Lexing::Str
            }
            (Lexing::Str, '"', _) => {
                masked.push('"');
                Lexing::Code
            }
            (Lexing::BlockComment(_) | Lexing::Str, ch, _) => {
                masked.push(blank(ch));
                state
            }
            (Lexing::Code | Lexing::LineComment, ch, _) => {
                masked.push(ch);
                state
            }
        };
    }
    masked
}

/// The code part of a line, without its trailing comment.
fn code(line: &str) -> &str {
    line.split_once(COMMENT_MARKER).map_or(line, |(code, _)| code)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Lines from the `enum type_name` header up to the brace that closes its body.
fn enum_body<'a>(source: &'a str, type_name: &str) -> Option<impl Iterator<Item = &'a str>> {
    let header = format!("enum {type_name}");
    let mut lines = source
        .lines()
        .skip_while(move |line| !contains_word(code(line), &header))
        .peekable();
    lines.peek()?;

    let mut depth = 0usize;
    let mut opened = false;
    let mut closed = false;
    Some(lines.take_while(move |line| {
        if closed {
            return false;
        }
        for ch in code(line).chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        closed = opened && depth == 0;
        true
    }))
}

/// Whether `needle` occurs in `haystack` with no identifier characters glued to either end.
///
/// So `Personal = 1` matches neither `Personal = 10` nor `Personal = 1i64`.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}
