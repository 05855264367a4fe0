use super::lexer::*;
use crate::command::*;
use crate::common::*;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T = Command> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    },
    UnexpectedString {
        expected: NonEmpty<TokenKind>,
    },
    InvalidDieSize,
    TrailingInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::InvalidDieSize => {
                write!(f, "a die needs a positive number of faces")
            }
            Self::TrailingInput => {
                write!(f, "unexpected input after the command")
            }
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
        }
    }

    pub fn parse(mut self) -> PResult {
        let command = match self.lexer.peek().copied() {
            Some(TokenKind::Die) => self.parse_die()?,
            Some(TokenKind::Integer) => {
                self.advance();
                Custom(self.lexer.slice().to_string()).into()
            }
            Some(TokenKind::Repeat) => {
                self.advance();
                RepeatLast.into()
            }
            Some(TokenKind::Reroll) => {
                self.advance();
                RerollAll.into()
            }
            Some(TokenKind::Clear) => {
                self.advance();
                Clear.into()
            }
            Some(TokenKind::Custom) => {
                self.advance();
                return Ok(self.rest_of_line());
            }
            _ => return self.unexpected_token(TokenKind::commands()),
        };
        self.expect_end()?;
        Ok(command)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: NonEmpty<TokenKind>) -> PResult<T> {
        match self.lexer.next() {
            Some(TokenKind::Error) => self.error(ParseErrorKind::UnexpectedString { expected }),
            found => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
        }
    }

    fn expect_end(&mut self) -> PResult<()> {
        if self.lexer.peek().is_some() {
            self.advance();
            self.error(ParseErrorKind::TrailingInput)
        } else {
            Ok(())
        }
    }

    fn parse_die(&mut self) -> PResult {
        self.advance();
        // the lexer only yields `d` followed by digits
        match self.lexer.slice()[1..].parse::<NonZeroUInt>() {
            Ok(sides) => Ok(RollDie(sides).into()),
            Err(_) => self.error(ParseErrorKind::InvalidDieSize),
        }
    }

    fn rest_of_line(&mut self) -> Command {
        let rest = &self.source[self.lexer.span().end..];
        Custom(rest.trim().to_string()).into()
    }
}
