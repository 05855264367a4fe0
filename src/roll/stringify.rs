use super::ledger::{Roll, RollLedger};
use crate::common::*;

pub trait Stringify: Sized + Default {
    fn stringify<R>(&mut self, ledger: &RollLedger<R>) -> String {
        let history = self.str_history(ledger.history());
        self.str_total(history, ledger.total())
    }

    fn str_history(&mut self, rolls: &[Roll]) -> String {
        rolls
            .iter()
            .map(|roll| self.str_roll(roll))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    fn str_roll(&mut self, roll: &Roll) -> String {
        roll.to_string()
    }

    fn str_total(&mut self, history: String, total: Total) -> String;
}

#[derive(Default)]
pub struct SimpleStringifier;

impl Stringify for SimpleStringifier {
    fn str_total(&mut self, history: String, total: Total) -> String {
        if history.is_empty() {
            total.to_string()
        } else {
            format!("{} = {}", history, total)
        }
    }
}

/// Bolds the lowest and highest faces, and code-formats the total.
#[derive(Default)]
pub struct MarkdownStringifier;

impl Stringify for MarkdownStringifier {
    fn str_roll(&mut self, roll: &Roll) -> String {
        if roll.is_extreme() {
            format!("**{}** ({})", roll.value(), roll.size())
        } else {
            roll.to_string()
        }
    }

    fn str_total(&mut self, history: String, total: Total) -> String {
        if history.is_empty() {
            format!("`{}`", total)
        } else {
            format!("{} = `{}`", history, total)
        }
    }
}

/// The caption of a fixed-size button, e.g. `"(2) D6"` once two d6 are rolled.
pub fn button_label<R>(ledger: &RollLedger<R>, size: UInt) -> String {
    match ledger.count_of_size(size) {
        0 => format!("D{}", size),
        n => format!("({}) D{}", n, size),
    }
}
