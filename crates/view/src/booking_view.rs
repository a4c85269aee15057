//! # Booking View
//!
//! State behind the appointment page of a single doctor: the doctor's
//! profile, the week of bookable slots and the patient's current selection.
//!
//! The week is regenerated whenever one of its inputs changes, i.e. when
//! another doctor is selected or the current moment moves on
//! ([`BookingView::select_doctor`], [`BookingView::refresh`]). Each
//! regeneration replaces the previous [`WeekSlots`] wholesale.

use chrono::NaiveDateTime;
use docslot_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{BookingConfirmation, BookingRequest},
        doctor::Doctor,
        time_slot::{DaySlots, TimeSlot, WeekSlots},
    },
    slots::{BusinessHours, generate_week},
};
use docslot_directory::{SharedDirectory, repositories::booking::BookingSubmitter};
use tracing::{debug, error, info, warn};

/// Outcome of looking the page's doctor up in the directory.
#[derive(Debug, Clone, PartialEq)]
pub enum DoctorState {
    /// The directory has no doctors yet.
    Loading,
    /// The directory is loaded but does not list the requested id.
    NotFound,
    Found(Doctor),
}

pub struct BookingView {
    directory: SharedDirectory,
    hours: BusinessHours,
    doctor_id: String,
    doctor: DoctorState,
    week: WeekSlots,
    selected_day: usize,
    selected_time: Option<TimeSlot>,
}

impl BookingView {
    /// Opens the page for `doctor_id` at the moment `now`.
    pub fn open(
        directory: SharedDirectory,
        doctor_id: impl Into<String>,
        now: NaiveDateTime,
        hours: BusinessHours,
    ) -> Self {
        let doctor_id = doctor_id.into();
        let doctor = resolve(&directory, &doctor_id);
        let week = generate_week(now, &hours);
        debug!("Generated {} slots for {}", week.slot_count(), doctor_id);

        Self {
            directory,
            hours,
            doctor_id,
            doctor,
            week,
            selected_day: 0,
            selected_time: None,
        }
    }

    pub fn directory(&self) -> &SharedDirectory {
        &self.directory
    }

    pub fn doctor_id(&self) -> &str {
        &self.doctor_id
    }

    pub fn doctor_state(&self) -> &DoctorState {
        &self.doctor
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match &self.doctor {
            DoctorState::Found(doctor) => Some(doctor),
            _ => None,
        }
    }

    pub fn hours(&self) -> &BusinessHours {
        &self.hours
    }

    pub fn week(&self) -> &WeekSlots {
        &self.week
    }

    pub fn selected_day(&self) -> usize {
        self.selected_day
    }

    pub fn selected_day_slots(&self) -> &DaySlots {
        // selected_day is only ever set to an index of the current week
        &self.week.days()[self.selected_day]
    }

    pub fn selected_time(&self) -> Option<&TimeSlot> {
        self.selected_time.as_ref()
    }

    /// Switches the page to another doctor and starts over with a fresh week.
    pub fn select_doctor(&mut self, doctor_id: impl Into<String>, now: NaiveDateTime) {
        self.doctor_id = doctor_id.into();
        self.doctor = resolve(&self.directory, &self.doctor_id);
        self.selected_day = 0;
        self.selected_time = None;
        self.regenerate(now);
    }

    /// Regenerates the week for a new current moment.
    ///
    /// The selected date is kept and found again in the new week; once it has
    /// dropped out of the week, today is selected instead. A selected time that
    /// is no longer offered, typically because it has passed, is cleared. A
    /// doctor that could not be resolved earlier is looked up again.
    pub fn refresh(&mut self, now: NaiveDateTime) {
        if !matches!(self.doctor, DoctorState::Found(_)) {
            self.doctor = resolve(&self.directory, &self.doctor_id);
        }
        let selected_date = self.selected_day_slots().date;
        self.regenerate(now);

        self.selected_day = self
            .week
            .days()
            .iter()
            .position(|day| day.date == selected_date)
            .unwrap_or_else(|| {
                debug!("Selected date {} has left the booking week", selected_date);
                0
            });

        let still_offered = self
            .selected_time
            .as_ref()
            .is_some_and(|slot| self.selected_day_slots().contains(slot.instant));
        if self.selected_time.is_some() && !still_offered {
            debug!("Selected slot is no longer offered, clearing it");
            self.selected_time = None;
        }
    }

    /// Selects the day at `index`, clearing any selected time.
    pub fn select_day(&mut self, index: usize) -> BookingResult<&DaySlots> {
        if self.week.day(index).is_none() {
            return Err(BookingError::Validation(format!(
                "day offset {} is outside the booking week",
                index
            )));
        }
        self.selected_day = index;
        self.selected_time = None;
        Ok(self.selected_day_slots())
    }

    /// Selects the slot at `index` of the selected day.
    pub fn select_time(&mut self, index: usize) -> BookingResult<&TimeSlot> {
        let slot = self
            .selected_day_slots()
            .get(index)
            .cloned()
            .ok_or_else(|| {
                BookingError::Validation(format!("no slot {} on the selected day", index))
            })?;
        Ok(self.selected_time.insert(slot))
    }

    /// Submits the selected slot for the current doctor.
    pub async fn confirm(
        &self,
        submitter: &dyn BookingSubmitter,
    ) -> BookingResult<BookingConfirmation> {
        let doctor = self.doctor().ok_or_else(|| {
            BookingError::NotFound(format!("Doctor {} not found", self.doctor_id))
        })?;
        let slot = self
            .selected_time
            .as_ref()
            .ok_or_else(|| BookingError::Validation("Select a time slot first".to_string()))?;

        let confirmation = submitter.submit(BookingRequest::new(&doctor.id, slot)).await?;
        info!("Appointment with {} confirmed for {}", doctor.name, slot.label);
        Ok(confirmation)
    }

    fn regenerate(&mut self, now: NaiveDateTime) {
        self.week = generate_week(now, &self.hours);
        debug!(
            "Regenerated {} slots for {} at {}",
            self.week.slot_count(),
            self.doctor_id,
            now
        );
    }
}

fn resolve(directory: &SharedDirectory, doctor_id: &str) -> DoctorState {
    if let Some(doctor) = directory.find_by_id(doctor_id) {
        return DoctorState::Found(doctor);
    }
    if directory.list().is_empty() {
        warn!("Doctor directory is not yet available");
        DoctorState::Loading
    } else {
        error!("Doctor {} not found in directory", doctor_id);
        DoctorState::NotFound
    }
}
