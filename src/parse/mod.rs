mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind};

use crate::command::Command;

/// Parses one command line. Keywords are case-insensitive.
pub fn parse(s: &str) -> Result<Command, ParseError> {
    parser::Parser::new(&s.to_ascii_lowercase()).parse()
}
