use super::{error::RollError, roller::Roller, stringify::SimpleStringifier, stringify::Stringify, RResult};
use crate::common::*;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt;
use tracing::debug;

pub type DefaultRoller = rand::prelude::ThreadRng;

/// One die throw. `1 <= value <= size` always holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Roll {
    size: NonZeroUInt,
    value: UInt,
}

impl Roll {
    /// Returns `None` if `value` is not a face of a `size`-sided die.
    pub fn new(size: NonZeroUInt, value: UInt) -> Option<Self> {
        (1..=size.get())
            .contains(&value)
            .then(|| Self { size, value })
    }

    fn throw(size: NonZeroUInt, roller: &mut impl Roller) -> Self {
        let value = roller.roll(size);
        debug_assert!((1..=size.get()).contains(&value));
        Self { size, value }
    }

    pub fn size(&self) -> UInt {
        self.size.get()
    }

    pub fn sides(&self) -> NonZeroUInt {
        self.size
    }

    pub fn value(&self) -> UInt {
        self.value
    }

    /// Whether the value is the lowest or highest face.
    pub fn is_extreme(&self) -> bool {
        self.value == 1 || self.value == self.size.get()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.size)
    }
}

/// A state change of a [`RollLedger`], delivered to its listeners.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LedgerEvent {
    Rolled(Roll),
    Rerolled { count: usize },
    Cleared,
}

type Listener = Box<dyn FnMut(&LedgerEvent)>;

/// The rolls of one session, in the order they were made.
pub struct RollLedger<R = DefaultRoller> {
    history: Vec<Roll>,
    last_size: Option<NonZeroUInt>,
    roller: R,
    listeners: Vec<Listener>,
}

impl RollLedger {
    pub fn new() -> Self {
        Self::with_roller(rand::thread_rng())
    }
}

impl Default for RollLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RollLedger<StdRng> {
    /// A ledger whose rolls are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_roller(StdRng::seed_from_u64(seed))
    }
}

impl<R: Roller> RollLedger<R> {
    pub fn with_roller(roller: R) -> Self {
        Self {
            history: Vec::new(),
            last_size: None,
            roller,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback run after every state change, in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&LedgerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: LedgerEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Rolls a `size`-sided die and records it.
    pub fn roll(&mut self, size: UInt) -> RResult<Roll> {
        let sides = NonZeroUInt::new(size).ok_or(RollError::InvalidSize(size))?;
        Ok(self.roll_die(sides))
    }

    pub fn roll_die(&mut self, sides: NonZeroUInt) -> Roll {
        let roll = Roll::throw(sides, &mut self.roller);
        debug!(size = roll.size(), value = roll.value(), "rolled");
        self.history.push(roll);
        self.last_size = Some(sides);
        self.emit(LedgerEvent::Rolled(roll));
        roll
    }

    /// Rolls the most recently rolled size again, if there is one.
    pub fn repeat_last(&mut self) -> Option<Roll> {
        let sides = self.last_size?;
        Some(self.roll_die(sides))
    }

    /// Throws every recorded die again, keeping sizes and order.
    pub fn reroll_all(&mut self) {
        let roller = &mut self.roller;
        for roll in self.history.iter_mut() {
            *roll = Roll::throw(roll.sides(), &mut *roller);
        }
        let count = self.history.len();
        debug!(count, total = self.total(), "rerolled all");
        self.emit(LedgerEvent::Rerolled { count });
    }

    pub fn clear(&mut self) {
        debug!(count = self.history.len(), "cleared");
        self.history.clear();
        self.last_size = None;
        self.emit(LedgerEvent::Cleared);
    }
}

impl<R> RollLedger<R> {
    pub fn history(&self) -> &[Roll] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn last_size(&self) -> Option<UInt> {
        self.last_size.map(NonZeroUInt::get)
    }

    pub fn can_repeat(&self) -> bool {
        self.last_size.is_some()
    }

    pub fn total(&self) -> Total {
        self.history.iter().map(|roll| Total::from(roll.value)).sum()
    }

    pub fn count_of_size(&self, size: UInt) -> usize {
        self.history.iter().filter(|roll| roll.size() == size).count()
    }

    /// `"value (size)"` for each roll, joined with `" + "`.
    pub fn describe(&self) -> String {
        SimpleStringifier::default().str_history(&self.history)
    }
}

impl<R> fmt::Debug for RollLedger<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollLedger")
            .field("history", &self.history)
            .field("last_size", &self.last_size)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::StepRoller;
    use std::{cell::RefCell, rc::Rc};

    fn mock_ledger() -> RollLedger<StepRoller> {
        RollLedger::with_roller(StepRoller::new(NonZeroUInt::new(10).unwrap(), 1))
    }

    fn sizes<R>(ledger: &RollLedger<R>) -> Vec<UInt> {
        ledger.history().iter().map(Roll::size).collect()
    }

    fn recomputed_total<R>(ledger: &RollLedger<R>) -> Total {
        let mut sum = 0;
        for roll in ledger.history() {
            sum += roll.value() as Total;
        }
        sum
    }

    #[test]
    fn test_roll_new_checks_range() {
        let d6 = NonZeroUInt::new(6).unwrap();
        assert!(Roll::new(d6, 0).is_none());
        assert!(Roll::new(d6, 7).is_none());
        assert_eq!(Roll::new(d6, 6).unwrap().to_string(), "6 (6)");
    }

    #[test]
    fn test_roll_values_in_range() {
        let mut ledger = RollLedger::seeded(1);
        for size in [1, 2, 4, 6, 8, 10, 12, 20, 100, 1_000_000] {
            for _ in 0..1_000 {
                let roll = ledger.roll(size).unwrap();
                assert_eq!(roll.size(), size);
                assert!((1..=size).contains(&roll.value()));
            }
        }
        let ones: Vec<_> = ledger.history().iter().filter(|roll| roll.size() == 1).collect();
        assert_eq!(ones.len(), 1_000);
        assert!(ones.iter().all(|roll| roll.value() == 1));
    }

    #[test]
    fn test_roll_every_face_appears() {
        let mut ledger = RollLedger::seeded(2);
        let mut seen = [false; 20];
        for _ in 0..2_000 {
            seen[ledger.roll(20).unwrap().value() as usize - 1] = true;
        }
        assert!(seen.iter().all(|&x| x));
    }

    #[test]
    fn test_roll_zero_is_invalid() {
        let mut ledger = mock_ledger();
        ledger.roll(4).unwrap();
        assert_eq!(ledger.roll(0), Err(RollError::InvalidSize(0)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.last_size(), Some(4));
    }

    #[test]
    fn test_scenario() {
        let mut ledger = mock_ledger();
        assert!(ledger.is_empty());
        let first = ledger.roll(20).unwrap();
        let second = ledger.roll(6).unwrap();
        assert_eq!((first.size(), first.value()), (20, 10));
        assert_eq!((second.size(), second.value()), (6, 5));
        assert_eq!(ledger.total(), 15);
        assert_eq!(ledger.describe(), "10 (20) + 5 (6)");
        ledger.clear();
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.describe(), "");
        assert_eq!(ledger.last_size(), None);
    }

    #[test]
    fn test_repeat_last() {
        let mut ledger = mock_ledger();
        assert_eq!(ledger.repeat_last(), None);
        assert!(ledger.is_empty());
        assert!(!ledger.can_repeat());

        ledger.roll(8).unwrap();
        let again = ledger.repeat_last().unwrap();
        assert_eq!(again.size(), 8);
        assert_eq!(sizes(&ledger), [8, 8]);

        ledger.clear();
        assert_eq!(ledger.repeat_last(), None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reroll_all_keeps_sizes() {
        let mut ledger = mock_ledger();
        for size in [20, 6, 6, 100] {
            ledger.roll(size).unwrap();
        }
        let before = ledger.history().to_vec();
        ledger.reroll_all();
        assert_eq!(sizes(&ledger), [20, 6, 6, 100]);
        assert_ne!(ledger.history(), &before[..]);
        assert_eq!(ledger.last_size(), Some(100));
        assert_eq!(ledger.total(), recomputed_total(&ledger));
    }

    #[test]
    fn test_reroll_all_empty() {
        let mut ledger = mock_ledger();
        ledger.reroll_all();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0);
    }

    #[test]
    fn test_total_tracks_history() {
        let mut ledger = RollLedger::seeded(3);
        for step in 0..200u32 {
            match step % 7 {
                0 => ledger.reroll_all(),
                5 if step % 5 == 0 => ledger.clear(),
                _ => {
                    ledger.roll(STANDARD_SIZES[step as usize % STANDARD_SIZES.len()]).unwrap();
                }
            }
            assert_eq!(ledger.total(), recomputed_total(&ledger));
        }
    }

    #[test]
    fn test_count_of_size() {
        let mut ledger = mock_ledger();
        assert_eq!(ledger.count_of_size(6), 0);
        ledger.roll(6).unwrap();
        ledger.roll(20).unwrap();
        ledger.roll(6).unwrap();
        assert_eq!(ledger.count_of_size(6), 2);
        assert_eq!(ledger.count_of_size(20), 1);
        assert_eq!(ledger.count_of_size(4), 0);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RollLedger::seeded(99);
        let mut b = RollLedger::seeded(99);
        for size in [20, 6, 100, 2] {
            assert_eq!(a.roll(size), b.roll(size));
        }
        a.reroll_all();
        b.reroll_all();
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut ledger = mock_ledger();
        {
            let events = Rc::clone(&events);
            ledger.subscribe(move |event| events.borrow_mut().push(*event));
        }

        assert!(ledger.repeat_last().is_none());
        assert!(ledger.roll(0).is_err());
        assert!(events.borrow().is_empty());

        let roll = ledger.roll(12).unwrap();
        ledger.reroll_all();
        ledger.clear();
        assert_eq!(
            *events.borrow(),
            [
                LedgerEvent::Rolled(roll),
                LedgerEvent::Rerolled { count: 1 },
                LedgerEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_listeners_run_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut ledger = mock_ledger();
        for id in 0..3 {
            let order = Rc::clone(&order);
            ledger.subscribe(move |_| order.borrow_mut().push(id));
        }
        ledger.roll(2).unwrap();
        assert_eq!(*order.borrow(), [0, 1, 2]);
    }
}
