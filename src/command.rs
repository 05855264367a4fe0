use crate::common::NonZeroUInt;
use crate::input::roll_custom;
use crate::roll::{Roll, RollLedger, Roller};

/// What a [`Command`] did to the ledger.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Rolled(Roll),
    Rerolled,
    Cleared,
    NoOp,
}

#[enum_dispatch::enum_dispatch]
pub trait Apply {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome;
}

#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Apply)]
pub enum Command {
    RollDie(RollDie),
    RepeatLast(RepeatLast),
    RerollAll(RerollAll),
    Clear(Clear),
    Custom(Custom),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RollDie(pub NonZeroUInt);

impl Apply for RollDie {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome {
        Outcome::Rolled(ledger.roll_die(self.0))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RepeatLast;

impl Apply for RepeatLast {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome {
        ledger.repeat_last().map_or(Outcome::NoOp, Outcome::Rolled)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RerollAll;

impl Apply for RerollAll {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome {
        ledger.reroll_all();
        Outcome::Rerolled
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Clear;

impl Apply for Clear {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome {
        ledger.clear();
        Outcome::Cleared
    }
}

/// A die size typed as free text; malformed text is ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Custom(pub String);

impl Apply for Custom {
    fn apply(&self, ledger: &mut RollLedger<impl Roller>) -> Outcome {
        roll_custom(&self.0, ledger).map_or(Outcome::NoOp, Outcome::Rolled)
    }
}
