//! Line tokenizer for the bookmark file
//!
//! Splits a single line into tokens on the unquoted `->` marker, honoring
//! shell-style quoting:
//!
//! - `'...'` keeps everything literal
//! - `"..."` keeps everything literal except `\"` and `\\`
//! - outside quotes, `\` makes the next character literal
//!
//! Quoted and unquoted pieces that touch are joined, so `"My Work"/Mail`
//! lexes to `My Work/Mail`. Each token is trimmed after unquoting.

use super::error::ParseErrorKind;

const ESCAPE: char = '\\';

/// Split `line` into arrow-delimited tokens
///
/// A piece of text between two arrows that is blank and contains no quotes is
/// not a token, so `a ->` yields one token while `a -> ""` yields two.
///
/// # Errors
///
/// Returns [`ParseErrorKind::UnterminatedQuote`] if a quote is never closed.
pub fn split_line(line: &str) -> Result<Vec<String>, ParseErrorKind> {
    let mut tokens = Vec::new();
    let mut current = TokenBuffer::default();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' if chars.peek() == Some(&'>') => {
                chars.next();
                current.finish_into(&mut tokens);
            }
            '\'' => {
                current.quoted = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.text.push(inner),
                        None => return Err(ParseErrorKind::UnterminatedQuote),
                    }
                }
            }
            '"' => {
                current.quoted = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some(ESCAPE) => match chars.peek() {
                            Some(&next @ ('"' | ESCAPE)) => {
                                chars.next();
                                current.text.push(next);
                            }
                            _ => current.text.push(ESCAPE),
                        },
                        Some(inner) => current.text.push(inner),
                        None => return Err(ParseErrorKind::UnterminatedQuote),
                    }
                }
            }
            ESCAPE => current.text.push(chars.next().unwrap_or(ESCAPE)),
            other => current.text.push(other),
        }
    }

    current.finish_into(&mut tokens);
    Ok(tokens)
}

/// Characters collected for the token in progress
#[derive(Debug, Default)]
struct TokenBuffer {
    text: String,
    /// Whether any part of the token came from a quoted section
    quoted: bool,
}

impl TokenBuffer {
    fn finish_into(&mut self, tokens: &mut Vec<String>) {
        let trimmed = self.text.trim();
        if self.quoted || !trimmed.is_empty() {
            tokens.push(trimmed.to_string());
        }
        self.text.clear();
        self.quoted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        let tokens = split_line("Work/Email -> https://mail.example.com").unwrap();
        assert_eq!(tokens, vec!["Work/Email", "https://mail.example.com"]);
    }

    #[test]
    fn test_whitespace_around_arrow_is_insignificant() {
        let tokens = split_line("   a->b   ").unwrap();
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_lone_dash_and_angle_are_literal() {
        let tokens = split_line("my-site -> https://my-site.example/?a>b").unwrap();
        assert_eq!(tokens, vec!["my-site", "https://my-site.example/?a>b"]);
    }

    #[test]
    fn test_quoted_arrow_is_not_a_delimiter() {
        let tokens = split_line(r#""A -> B" -> 'x -> y'"#).unwrap();
        assert_eq!(tokens, vec!["A -> B", "x -> y"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        let tokens = split_line(r#""My Work"/Mail -> u"#).unwrap();
        assert_eq!(tokens, vec!["My Work/Mail", "u"]);
    }

    #[test]
    fn test_escapes() {
        let tokens = split_line(r#"a\->b -> "say \"hi\"""#).unwrap();
        assert_eq!(tokens, vec!["a->b", r#"say "hi""#]);

        let tokens = split_line(r"'c:\dir' -> u").unwrap();
        assert_eq!(tokens, vec![r"c:\dir", "u"]);
    }

    #[test]
    fn test_missing_and_extra_tokens() {
        assert_eq!(split_line("noarrowhere").unwrap(), vec!["noarrowhere"]);
        assert_eq!(split_line("a ->").unwrap(), vec!["a"]);
        assert_eq!(split_line("-> u").unwrap(), vec!["u"]);
        assert_eq!(split_line("a -> b -> c").unwrap().len(), 3);
    }

    #[test]
    fn test_quoted_empty_token_counts() {
        assert_eq!(split_line(r#"a -> """#).unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(split_line("'a -> b"), Err(ParseErrorKind::UnterminatedQuote));
        assert_eq!(split_line(r#"a -> "b"#), Err(ParseErrorKind::UnterminatedQuote));
    }
}
