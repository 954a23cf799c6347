//! Parsing of the list-literal cells in the knowledge base table.
//!
//! Cells look like `['wilting', 'leaf spot']`. Only lists (or tuples) of
//! quoted strings are accepted; anything else is reported as malformed so the
//! loader can treat the cell as empty.

use std::iter::Peekable;
use std::str::Chars;

/// Normalize a name the way every entry in the knowledge base is keyed:
/// surrounding whitespace first, then single quotes, then double quotes.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim().trim_matches('\'').trim_matches('"')
}

/// Parse a list literal into its string items.
///
/// Returns `None` when the text is not a bracketed or parenthesized sequence
/// of quoted strings.
pub fn parse_list(text: &str) -> Option<Vec<String>> {
    let mut chars = text.trim().chars().peekable();

    let close = match chars.next()? {
        '[' => ']',
        '(' => ')',
        _ => return None,
    };

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied()? {
            c if c == close => {
                chars.next();
                break;
            }
            '\'' | '"' => items.push(parse_string(&mut chars)?),
            _ => return None,
        }

        skip_whitespace(&mut chars);
        match chars.next()? {
            ',' => continue,
            c if c == close => break,
            _ => return None,
        }
    }

    // Nothing may follow the closing bracket.
    if chars.any(|c| !c.is_whitespace()) {
        return None;
    }

    Some(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn parse_string(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let quote = chars.next()?;
    let mut value = String::new();

    loop {
        match chars.next()? {
            c if c == quote => return Some(value),
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                'r' => value.push('\r'),
                c @ ('\\' | '\'' | '"') => value.push(c),
                other => {
                    value.push('\\');
                    value.push(other);
                }
            },
            '\n' => return None,
            c => value.push(c),
        }
    }
}
