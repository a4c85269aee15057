use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Number of days covered by a [`WeekSlots`], today included.
pub const DAYS_IN_WEEK: usize = 7;

/// A single bookable instant together with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Wall-clock time in the clinic's timezone.
    pub instant: NaiveDateTime,
    /// `hh:mm AM/PM`, e.g. `09:30 AM`.
    pub label: String,
}

/// The bookable slots of one calendar day, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

impl DaySlots {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            slots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.slots.iter()
    }

    /// Returns true if a slot starting at `instant` is offered on this day.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.slots.iter().any(|slot| slot.instant == instant)
    }
}

/// Seven consecutive [`DaySlots`], index 0 being today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DaySlots>", into = "Vec<DaySlots>")]
pub struct WeekSlots {
    days: Vec<DaySlots>,
}

impl WeekSlots {
    pub fn days(&self) -> &[DaySlots] {
        &self.days
    }

    pub fn day(&self, offset: usize) -> Option<&DaySlots> {
        self.days.get(offset)
    }

    pub fn today(&self) -> &DaySlots {
        // a week always holds DAYS_IN_WEEK days
        &self.days[0]
    }

    /// Total number of slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(DaySlots::len).sum()
    }

    /// Finds the day offset and slot for an exact instant.
    pub fn find(&self, instant: NaiveDateTime) -> Option<(usize, &TimeSlot)> {
        self.days.iter().enumerate().find_map(|(offset, day)| {
            day.iter()
                .find(|slot| slot.instant == instant)
                .map(|slot| (offset, slot))
        })
    }
}

impl From<[DaySlots; DAYS_IN_WEEK]> for WeekSlots {
    fn from(days: [DaySlots; DAYS_IN_WEEK]) -> Self {
        Self {
            days: Vec::from(days),
        }
    }
}

impl TryFrom<Vec<DaySlots>> for WeekSlots {
    type Error = BookingError;

    fn try_from(days: Vec<DaySlots>) -> Result<Self, Self::Error> {
        if days.len() != DAYS_IN_WEEK {
            return Err(BookingError::Validation(format!(
                "a week holds {} days, got {}",
                DAYS_IN_WEEK,
                days.len()
            )));
        }
        Ok(Self { days })
    }
}

impl From<WeekSlots> for Vec<DaySlots> {
    fn from(week: WeekSlots) -> Self {
        week.days
    }
}

impl<'a> IntoIterator for &'a WeekSlots {
    type Item = &'a DaySlots;
    type IntoIter = std::slice::Iter<'a, DaySlots>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
