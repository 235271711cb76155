//! Tokenizer for directive text
//!
//! Tokens are separated by whitespace. A newline ends a directive line, `#`
//! at the start of a token comments out the rest of the line, and a token
//! that is exactly `{` or `}` opens or closes a block. Anything else is a
//! word, so placeholders such as `{env.TOKEN}` stay intact. Double-quoted
//! words may contain whitespace, newlines and `\"` escapes.

use ferrolisten_common::SyntaxError;

/// Lexical token kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Word(String),
    Open,
    Close,
    Newline,
}

/// A token and the line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }
}

/// Split `input` into tokens.
pub fn tokenize(file: &str, input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line = 1;

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                chars.next();
                tokens.push(Token::new(TokenKind::Newline, line));
                line += 1;
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                while let Some(&c) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '"' => {
                chars.next();
                let start = line;
                let mut text = String::new();
                let mut closed = false;

                while let Some(c) = chars.next() {
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' if chars.peek() == Some(&'"') => {
                            chars.next();
                            text.push('"');
                        }
                        '\n' => {
                            line += 1;
                            text.push(c);
                        }
                        _ => text.push(c),
                    }
                }

                if !closed {
                    return Err(SyntaxError::new(file, start, "unterminated quoted string"));
                }
                tokens.push(Token::new(TokenKind::Word(text), start));
            }
            _ => {
                let mut text = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    text.push(c);
                    chars.next();
                }

                let kind = match text.as_str() {
                    "{" => TokenKind::Open,
                    "}" => TokenKind::Close,
                    _ => TokenKind::Word(text),
                };
                tokens.push(Token::new(kind, line));
            }
        }
    }

    Ok(tokens)
}
