use crate::common::NonZeroUInt;
use crate::roll::{Roll, RollError, RollLedger, Roller};
use tracing::debug;

/// Parses the text of the custom roll field as a die size.
pub fn parse_custom_size(text: &str) -> Result<NonZeroUInt, RollError> {
    text.trim()
        .parse()
        .map_err(|_| RollError::InvalidCustomInput(text.to_string()))
}

/// Rolls the size typed in `text`, or drops the text if it is not a positive integer.
pub(crate) fn roll_custom<R: Roller>(text: &str, ledger: &mut RollLedger<R>) -> Option<Roll> {
    match parse_custom_size(text) {
        Ok(sides) => Some(ledger.roll_die(sides)),
        Err(why) => {
            debug!(%why, "discarding custom roll");
            None
        }
    }
}

/// The free-text field used to roll a die of any size.
#[derive(Debug, Default, Clone)]
pub struct CustomInput {
    text: String,
}

impl CustomInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Rolls the entered size and empties the field.
    ///
    /// Text that is not a positive integer is dropped without touching the ledger.
    pub fn submit<R: Roller>(&mut self, ledger: &mut RollLedger<R>) -> Option<Roll> {
        let text = std::mem::take(&mut self.text);
        roll_custom(&text, ledger)
    }
}
