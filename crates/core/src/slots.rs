//! # Slot generation
//!
//! Produces the bookable slots of the coming week from a caller-supplied
//! "now" and the clinic's business hours.
//!
//! ## Algorithm
//!
//! For every day offset `i` in `0..7`:
//!
//! 1. The day closes at `close_hour:00`; slots run over `[start, close)`.
//! 2. Later days start at `open_hour:00`.
//! 3. Today starts at a rounded-up "now": the hour is `now.hour + 1` once the
//!    clinic is open (`now.hour > open_hour`), `open_hour` otherwise, and the
//!    minute is `30` when `now.minute > 30`, `0` otherwise. Slots at or before
//!    `now` are then dropped.
//! 4. Instants advance by `step_minutes` until the close boundary.
//!
//! The generator never fails. A closing hour at or before the opening hour, or
//! a zero step, simply produces empty days.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::time_slot::{DAYS_IN_WEEK, DaySlots, TimeSlot, WeekSlots};

/// Format used for slot labels, e.g. `09:30 AM`.
pub const LABEL_FORMAT: &str = "%I:%M %p";

/// Daily window in which appointments are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
    pub step_minutes: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_hour: 10,
            close_hour: 21,
            step_minutes: 30,
        }
    }
}

impl BusinessHours {
    pub fn new(open_hour: u32, close_hour: u32, step_minutes: u32) -> Self {
        Self {
            open_hour,
            close_hour,
            step_minutes,
        }
    }

    /// Checks the values a configuration source may get wrong.
    ///
    /// A closing hour at or before the opening hour is accepted: it yields
    /// empty days rather than an error.
    pub fn validate(&self) -> BookingResult<()> {
        if self.open_hour > 23 {
            return Err(BookingError::Validation(format!(
                "open hour must be between 0 and 23, got {}",
                self.open_hour
            )));
        }
        if self.close_hour > 23 {
            return Err(BookingError::Validation(format!(
                "close hour must be between 0 and 23, got {}",
                self.close_hour
            )));
        }
        if self.step_minutes == 0 {
            return Err(BookingError::Validation(
                "slot length must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if no slot can ever be produced.
    pub fn is_degenerate(&self) -> bool {
        self.close_hour <= self.open_hour || self.step_minutes == 0
    }

    pub fn step(&self) -> Duration {
        Duration::minutes(i64::from(self.step_minutes))
    }

    /// `date` at `open_hour:00`.
    pub fn opening(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.open_hour)
    }

    /// `date` at `close_hour:00`, the first instant no slot may start at.
    pub fn closing(&self, date: NaiveDate) -> NaiveDateTime {
        at_hour(date, self.close_hour)
    }
}

/// Hours are expected in `0..=23`. Hour 24 rolls over to the next midnight,
/// which today's rounding relies on; anything larger is clamped to it.
fn at_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::default()) + Duration::hours(i64::from(hour.min(24)))
}

/// Lazy ascending sequence of instants over `[start, end)`.
#[derive(Debug, Clone)]
pub struct SlotIter {
    next: NaiveDateTime,
    end: NaiveDateTime,
    step: Duration,
}

impl SlotIter {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, step: Duration) -> Self {
        Self {
            next: start,
            end,
            step,
        }
    }
}

impl Iterator for SlotIter {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step <= Duration::zero() || self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        Some(current)
    }
}

/// Renders an instant the way slot labels are shown, e.g. `08:00 PM`.
pub fn format_label(instant: NaiveDateTime) -> String {
    instant.format(LABEL_FORMAT).to_string()
}

/// First candidate slot for today, before slots at or before `now` are dropped.
pub fn first_slot_today(now: NaiveDateTime, hours: &BusinessHours) -> NaiveDateTime {
    let hour = if now.hour() > hours.open_hour {
        now.hour() + 1
    } else {
        hours.open_hour
    };
    let minute = if now.minute() > 30 { 30 } else { 0 };

    let rounded = at_hour(now.date(), hour) + Duration::minutes(minute);
    rounded.max(hours.opening(now.date()))
}

/// Builds the slots of `date` from `start` up to the closing boundary.
pub fn generate_day(date: NaiveDate, start: NaiveDateTime, hours: &BusinessHours) -> DaySlots {
    let slots = SlotIter::new(start, hours.closing(date), hours.step())
        .map(into_slot)
        .collect();
    DaySlots { date, slots }
}

/// Generates the seven days of slots starting with the day of `now`.
pub fn generate_week(now: NaiveDateTime, hours: &BusinessHours) -> WeekSlots {
    let today = now.date();

    let days: [DaySlots; DAYS_IN_WEEK] = std::array::from_fn(|offset| {
        let date = today + Duration::days(offset as i64);
        if offset == 0 {
            let slots = SlotIter::new(first_slot_today(now, hours), hours.closing(date), hours.step())
                .skip_while(|instant| *instant <= now)
                .map(into_slot)
                .collect();
            DaySlots { date, slots }
        } else {
            generate_day(date, hours.opening(date), hours)
        }
    });

    WeekSlots::from(days)
}

fn into_slot(instant: NaiveDateTime) -> TimeSlot {
    TimeSlot {
        instant,
        label: format_label(instant),
    }
}
