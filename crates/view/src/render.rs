//! Render model of the booking page and its plain-text rendering.

use std::fmt;

use chrono::Datelike;
use docslot_core::models::{doctor::Doctor, time_slot::DaySlots};
use docslot_directory::repositories::doctor::related_doctors;
use serde::Serialize;

use crate::booking_view::{BookingView, DoctorState};

/// Maximum number of related doctors listed under the booking section.
pub const RELATED_LIMIT: usize = 5;

pub const NO_IMAGE: &str = "No Image Available";
pub const LOADING_MESSAGE: &str = "Loading doctor information...";
pub const NO_SLOTS_MESSAGE: &str = "No slots available for this day.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub image: Option<String>,
    /// `degree - speciality`
    pub credentials: String,
    pub experience: String,
    pub about: String,
    pub fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DoctorPanel {
    Loading,
    NotFound { doctor_id: String },
    Profile(ProfileCard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTab {
    /// `SUN` through `SAT`
    pub weekday: String,
    pub day_of_month: u32,
    pub enabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeChip {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedDoctor {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPage {
    pub doctor: DoctorPanel,
    pub days: Vec<DayTab>,
    pub times: Vec<TimeChip>,
    /// Set when the selected day offers no slot.
    pub empty_day_message: Option<String>,
    pub related: Vec<RelatedDoctor>,
}

impl BookingView {
    /// Builds the render model for the current state.
    ///
    /// The slot pickers and related doctors are only filled in once the
    /// doctor has been found in the directory.
    pub fn page(&self, currency_symbol: &str) -> BookingPage {
        let doctor = match self.doctor_state() {
            DoctorState::Loading => return BookingPage::without_doctor(DoctorPanel::Loading),
            DoctorState::NotFound => {
                return BookingPage::without_doctor(DoctorPanel::NotFound {
                    doctor_id: self.doctor_id().to_string(),
                });
            }
            DoctorState::Found(doctor) => doctor,
        };

        let days = self
            .week()
            .days()
            .iter()
            .enumerate()
            .map(|(index, day)| day_tab(day, index == self.selected_day()))
            .collect();

        let selected = self.selected_time().map(|slot| slot.instant);
        let day = self.selected_day_slots();
        let times = day
            .iter()
            .map(|slot| TimeChip {
                label: slot.label.to_lowercase(),
                selected: Some(slot.instant) == selected,
            })
            .collect();
        let empty_day_message = day.is_empty().then(|| NO_SLOTS_MESSAGE.to_string());

        let related = related_doctors(
            &**self.directory(),
            &doctor.speciality,
            &doctor.id,
            RELATED_LIMIT,
        )
        .into_iter()
        .map(|related| RelatedDoctor {
            id: related.id,
            name: related.name,
            speciality: related.speciality,
            available: related.available,
        })
        .collect();

        BookingPage {
            doctor: DoctorPanel::Profile(profile_card(doctor, currency_symbol)),
            days,
            times,
            empty_day_message,
            related,
        }
    }
}

impl BookingPage {
    fn without_doctor(doctor: DoctorPanel) -> Self {
        Self {
            doctor,
            days: Vec::new(),
            times: Vec::new(),
            empty_day_message: None,
            related: Vec::new(),
        }
    }
}

fn profile_card(doctor: &Doctor, currency_symbol: &str) -> ProfileCard {
    ProfileCard {
        name: doctor.name.clone(),
        image: doctor.image.clone(),
        credentials: format!("{} - {}", doctor.degree, doctor.speciality),
        experience: doctor.experience.clone(),
        about: doctor.about.clone(),
        fee: doctor.fee_label(currency_symbol),
    }
}

fn day_tab(day: &DaySlots, selected: bool) -> DayTab {
    DayTab {
        weekday: day.date.format("%a").to_string().to_uppercase(),
        day_of_month: day.date.day(),
        enabled: !day.is_empty(),
        selected,
    }
}

/// Renders the page for a terminal.
pub fn render_text(page: &BookingPage) -> String {
    page.to_string()
}

/// Days and times are numbered from 1 so they can be typed back as commands.
impl fmt::Display for BookingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.doctor {
            DoctorPanel::Loading => return writeln!(f, "{}", LOADING_MESSAGE),
            DoctorPanel::NotFound { doctor_id } => {
                return writeln!(f, "Doctor {} was not found.", doctor_id);
            }
            DoctorPanel::Profile(card) => {
                writeln!(f, "{} (verified)", card.name)?;
                writeln!(f, "{} | {}", card.credentials, card.experience)?;
                writeln!(f, "Image: {}", card.image.as_deref().unwrap_or(NO_IMAGE))?;
                if !card.about.is_empty() {
                    writeln!(f, "About: {}", card.about)?;
                }
                writeln!(f, "Appointment fee: {}", card.fee)?;
            }
        }

        writeln!(f, "\nBooking Slots")?;
        let days: Vec<String> = self
            .days
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let text = format!("{} {} {}", index + 1, tab.weekday, tab.day_of_month);
                match (tab.selected, tab.enabled) {
                    (true, _) => format!("[{}]", text),
                    (false, true) => format!(" {} ", text),
                    (false, false) => format!("({})", text),
                }
            })
            .collect();
        writeln!(f, "{}", days.join(" "))?;

        match &self.empty_day_message {
            Some(message) => writeln!(f, "{}", message)?,
            None => {
                let times: Vec<String> = self
                    .times
                    .iter()
                    .enumerate()
                    .map(|(index, chip)| {
                        let text = format!("{}) {}", index + 1, chip.label);
                        if chip.selected { format!("[{}]", text) } else { text }
                    })
                    .collect();
                writeln!(f, "{}", times.join("  "))?;
            }
        }

        if !self.related.is_empty() {
            writeln!(f, "\nRelated Doctors")?;
            for doctor in &self.related {
                let status = if doctor.available { "Available" } else { "Not Available" };
                writeln!(f, "- {} ({}) [{}] {}", doctor.name, doctor.speciality, doctor.id, status)?;
            }
        }

        Ok(())
    }
}
