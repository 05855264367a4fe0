use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of die faces.
pub trait Roller {
    /// Returns a face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
