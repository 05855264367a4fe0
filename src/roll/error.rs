use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("a die must have at least one face, got {0}")]
    InvalidSize(crate::common::UInt),
    #[error("{0:?} is not a positive integer")]
    InvalidCustomInput(String),
}
