//! Builds the directive tree from tokens

use crate::directive::Directive;
use crate::lexer::{tokenize, Token, TokenKind};
use ferrolisten_common::{Result, SyntaxError};
use std::iter::Peekable;
use std::sync::Arc;
use std::vec::IntoIter;

type ParseResult<T> = std::result::Result<T, SyntaxError>;

/// Parse directive text into its top-level directives.
///
/// The first syntax error aborts the whole parse; no partial tree is
/// returned.
pub fn parse(file: &str, input: &str) -> Result<Vec<Directive>> {
    let tokens = tokenize(file, input)?;
    let mut parser = Parser {
        file: Arc::from(file),
        tokens: tokens.into_iter().peekable(),
    };
    let directives = parser.directives(None)?;
    tracing::trace!(file, count = directives.len(), "parsed directives");
    Ok(directives)
}

/// Parse text that must contain exactly one top-level directive.
pub fn parse_single(file: &str, input: &str) -> Result<Directive> {
    let mut directives = parse(file, input)?.into_iter();
    let first = directives
        .next()
        .ok_or_else(|| SyntaxError::new(file, 1, "no directive found"))?;
    if let Some(extra) = directives.next() {
        return Err(extra
            .err(format!("unexpected directive '{}'", extra.name))
            .into());
    }
    Ok(first)
}

struct Parser {
    file: Arc<str>,
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    fn error(&self, line: usize, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.file.as_ref(), line, message)
    }

    /// Read directives until end of input, or until the `}` closing `owner`.
    fn directives(&mut self, owner: Option<&Directive>) -> ParseResult<Vec<Directive>> {
        let mut directives = Vec::new();

        loop {
            let Some(token) = self.tokens.next() else {
                return match owner {
                    Some(d) => Err(d.err(format!("unterminated block for '{}'", d.name))),
                    None => Ok(directives),
                };
            };

            match token.kind {
                TokenKind::Newline => {}
                TokenKind::Close => {
                    if owner.is_some() {
                        return Ok(directives);
                    }
                    return Err(self.error(token.line, "unexpected '}'"));
                }
                TokenKind::Open => {
                    return Err(self.error(token.line, "unexpected '{' without a directive name"));
                }
                TokenKind::Word(name) => directives.push(self.directive(name, token.line)?),
            }
        }
    }

    /// Read the arguments and optional block of one directive line.
    fn directive(&mut self, name: String, line: usize) -> ParseResult<Directive> {
        let mut directive = Directive {
            name,
            args: Vec::new(),
            block: None,
            file: self.file.clone(),
            line,
        };

        while let Some(token) = self.tokens.peek() {
            match &token.kind {
                TokenKind::Word(_) => {
                    if let Some(Token {
                        kind: TokenKind::Word(arg),
                        ..
                    }) = self.tokens.next()
                    {
                        directive.args.push(arg);
                    }
                }
                TokenKind::Newline | TokenKind::Close => break,
                TokenKind::Open => {
                    self.tokens.next();
                    let block = self.directives(Some(&directive))?;
                    directive.block = Some(block);

                    // A closed block ends the line.
                    let trailing = self.tokens.peek().map(|t| (t.kind.clone(), t.line));
                    match trailing {
                        Some((TokenKind::Word(word), line)) => {
                            return Err(self.error(
                                line,
                                format!("unexpected '{}' after closing brace", word),
                            ));
                        }
                        Some((TokenKind::Open, line)) => {
                            return Err(self.error(line, "unexpected '{'"));
                        }
                        _ => {}
                    }
                    break;
                }
            }
        }

        Ok(directive)
    }
}
