use anyhow::Context;
use clap::Parser;
use dice_ledger::{
    button_label, Apply, MarkdownStringifier, Outcome, RollLedger, SimpleStringifier, Stringify,
    BUTTON_COLUMNS,
};
use rand::{rngs::StdRng, SeedableRng};
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
commands:
  d<N>            roll an N-sided die (d2, d4, d6, d8, d10, d12, d20, d100, ...)
  <N>             roll an N-sided die typed as a custom size
  custom <text>   roll a custom size; text that is not a positive integer is ignored
  r, repeat       roll the last size again
  reroll          roll every die in the history again
  c, clear        empty the history
  help            show this message
  quit            leave";

/// Roll dice and keep a running total.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Seed the dice for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
    /// Render the history as markdown.
    #[arg(long)]
    markdown: bool,
}

/// One line typed at the prompt. Matching ignores case, like the command parser.
#[derive(Debug, PartialEq)]
enum Input {
    Blank,
    Help,
    Quit,
    Command(String),
}

impl Input {
    fn read(line: &str) -> Self {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "" => Self::Blank,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Command(line),
        }
    }
}

fn draw(out: &mut impl Write, ledger: &RollLedger<StdRng>, markdown: bool) -> io::Result<()> {
    let line = if markdown {
        MarkdownStringifier.stringify(ledger)
    } else {
        SimpleStringifier.stringify(ledger)
    };
    writeln!(out, "{}", line)?;
    for row in 0..BUTTON_COLUMNS[0].len() {
        let left = button_label(ledger, BUTTON_COLUMNS[0][row]);
        let right = button_label(ledger, BUTTON_COLUMNS[1][row]);
        writeln!(out, "  [{:^10}]  [{:^10}]", left, right)?;
    }
    if ledger.can_repeat() {
        writeln!(out, "  repeat last: d{}", ledger.last_size().unwrap_or_default())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut ledger = RollLedger::with_roller(rng);
    let dirty = Rc::new(Cell::new(true));
    {
        let dirty = Rc::clone(&dirty);
        ledger.subscribe(move |_| dirty.set(true));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        let mut out = stdout.lock();
        if dirty.replace(false) {
            draw(&mut out, &ledger, args.markdown)?;
        }
        write!(out, "> ")?;
        out.flush()?;
        drop(out);

        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };
        match Input::read(&line) {
            Input::Blank => {}
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
            Input::Command(s) => match dice_ledger::parse(&s) {
                Ok(command) => {
                    if let Outcome::Rolled(roll) = command.apply(&mut ledger) {
                        println!("rolled {}", roll);
                    }
                }
                Err(why) => eprintln!("Error: {}", why),
            },
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_ignores_case() {
        assert_eq!(Input::read("  "), Input::Blank);
        assert_eq!(Input::read("HELP"), Input::Help);
        assert_eq!(Input::read("Quit"), Input::Quit);
        assert_eq!(Input::read(" EXIT\n"), Input::Quit);
        assert_eq!(Input::read("D20 "), Input::Command("d20".into()));
    }
}
