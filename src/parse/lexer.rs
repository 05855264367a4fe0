use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[regex(r"d[0-9]+")]
    Die,
    #[regex(r"[0-9]+")]
    Integer,

    #[token("repeat")]
    #[token("r")]
    Repeat,
    #[token("reroll")]
    Reroll,
    #[token("clear")]
    #[token("c")]
    Clear,
    #[token("custom")]
    Custom,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    /// Tokens that may start a command line.
    pub fn commands() -> NonEmpty<Self> {
        vec1![
            Self::Die,
            Self::Integer,
            Self::Repeat,
            Self::Reroll,
            Self::Clear,
            Self::Custom,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Die => "<die>",
            Integer => "<integer>",
            Repeat => "'repeat'",
            Reroll => "'reroll'",
            Clear => "'clear'",
            Custom => "'custom'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
