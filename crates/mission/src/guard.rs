//! Keyword denylist applied to player queries before they run.
//!
//! This keeps players on read-only queries; it is not a defense against a
//! hostile query.

use snafu::prelude::*;

pub const RESTRICTED_KEYWORDS: [&str; 10] = [
    "DROP", "DELETE", "UPDATE", "INSERT", "CREATE", "ALTER", "GRANT", "TRUNCATE", "EXEC", "PRAGMA",
];

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("Only SELECT queries are allowed in this phase."))]
    NotSelect,

    #[snafu(display("Only one statement can be submitted at a time."))]
    MultipleStatements,

    #[snafu(display("The command '{}' is not allowed in this mission.", keyword))]
    RestrictedKeyword { keyword: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Accepts a single SELECT statement free of restricted keywords. Words inside
/// string literals, quoted identifiers and comments are ignored.
pub fn check_query(query: &str, allow_restricted: bool) -> Result<()> {
    if allow_restricted {
        return Ok(());
    }

    let tokens = tokenize(query);

    match tokens.first() {
        Some(Token::Word(word)) if word.eq_ignore_ascii_case("SELECT") => {}
        _ => return NotSelectSnafu.fail(),
    }

    let mut terminated = false;
    for token in tokens {
        // only whitespace and comments may follow the terminator
        ensure!(!terminated, MultipleStatementsSnafu);

        match token {
            Token::Semicolon => terminated = true,
            Token::Other => {}
            Token::Word(word) => {
                if let Some(keyword) = RESTRICTED_KEYWORDS
                    .iter()
                    .find(|keyword| word.eq_ignore_ascii_case(keyword))
                {
                    return RestrictedKeywordSnafu { keyword: *keyword }.fail();
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Semicolon,
    /// A literal, quoted identifier or punctuation.
    Other,
}

fn tokenize(query: &str) -> Vec<Token<'_>> {
    let bytes = query.as_bytes();
    let mut tokens = vec![];
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == quote {
                        // a doubled quote escapes itself
                        if bytes.get(i + 1) == Some(&quote) {
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
                i += 1;
                tokens.push(Token::Other);
            }
            b'-' if bytes.get(i + 1) == Some(&b'-') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = query[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
            }
            b';' => {
                tokens.push(Token::Semicolon);
                i += 1;
            }
            b if is_word_byte(b) => {
                let start = i;
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
                tokens.push(Token::Word(&query[start..i]));
            }
            b if b.is_ascii_whitespace() => i += 1,
            _ => {
                tokens.push(Token::Other);
                i += 1;
            }
        }
    }

    tokens
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
