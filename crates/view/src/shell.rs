//! Line-oriented front end for the booking page.
//!
//! Every command is an input event: it is applied to the [`BookingView`]
//! and the page is rendered again. Command errors are reported and the
//! loop carries on.

use std::io::{BufRead, Write};

use docslot_directory::repositories::booking::BookingSubmitter;
use eyre::Result;
use tracing::debug;

use crate::{booking_view::BookingView, clock::Clock, render::render_text};

pub const HELP: &str = "\
Commands:
  day N       select the N-th day
  time N      select the N-th time of the selected day
  book        book the selected time
  doctor ID   switch to another doctor
  refresh     reload the slots for the current time
  help        show this help
  quit        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based day offset.
    Day(usize),
    /// Zero-based slot index within the selected day.
    Time(usize),
    Book,
    Doctor(String),
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Day and time numbers are typed from 1.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| "empty command".to_string())?;
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments for {}", name));
        }

        match (name.to_lowercase().as_str(), argument) {
            ("day", Some(n)) => ordinal(n).map(Command::Day),
            ("time", Some(n)) => ordinal(n).map(Command::Time),
            ("doctor", Some(id)) => Ok(Command::Doctor(id.to_string())),
            ("book", None) => Ok(Command::Book),
            ("refresh", None) => Ok(Command::Refresh),
            ("help", None) => Ok(Command::Help),
            ("quit" | "exit", None) => Ok(Command::Quit),
            ("day" | "time" | "doctor", None) => Err(format!("{} needs an argument", name)),
            _ => Err(format!("unknown command: {}", line.trim())),
        }
    }
}

fn ordinal(raw: &str) -> std::result::Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a number from 1, got {}", raw)),
    }
}

/// Runs the booking page until `quit` or end of input.
pub async fn run_interactive<R, W>(
    input: R,
    mut output: W,
    view: &mut BookingView,
    submitter: &dyn BookingSubmitter,
    clock: &dyn Clock,
    currency_symbol: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_text(&view.page(currency_symbol)))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };
        debug!("Applying {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Day(index) => {
                if let Err(e) = view.select_day(index) {
                    writeln!(output, "error: {}", e)?;
                }
            }
            Command::Time(index) => {
                if let Err(e) = view.select_time(index) {
                    writeln!(output, "error: {}", e)?;
                }
            }
            Command::Doctor(id) => view.select_doctor(id, clock.now()),
            Command::Refresh => view.refresh(clock.now()),
            Command::Book => {
                view.refresh(clock.now());
                match view.confirm(submitter).await {
                    Ok(confirmation) => writeln!(
                        output,
                        "Booked {} (confirmation {})",
                        confirmation.instant.format("%a %d %b %I:%M %p"),
                        confirmation.id
                    )?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
        }

        write!(output, "{}", render_text(&view.page(currency_symbol)))?;
    }

    output.flush()?;
    Ok(())
}
