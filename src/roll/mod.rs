mod error;
mod ledger;
mod roller;
mod stringify;

type RResult<T> = Result<T, RollError>;

pub use error::RollError;
pub use ledger::{DefaultRoller, LedgerEvent, Roll, RollLedger};
pub use roller::Roller;
pub use stringify::{button_label, MarkdownStringifier, SimpleStringifier, Stringify};
