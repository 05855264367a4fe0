//! The logic core of a dice roller: a session ledger of die throws, its
//! running total and textual views, and the commands that drive it.

mod command;
mod common;
mod input;
pub mod parse;
pub mod roll;

pub use command::{Apply, Clear, Command, Custom, Outcome, RepeatLast, RerollAll, RollDie};
pub use common::{NonZeroUInt, Total, UInt, BUTTON_COLUMNS, STANDARD_SIZES};
pub use input::{parse_custom_size, CustomInput};
pub use parse::{parse, ParseError};
pub use roll::{
    button_label, LedgerEvent, MarkdownStringifier, Roll, RollError, RollLedger, Roller,
    SimpleStringifier, Stringify,
};
