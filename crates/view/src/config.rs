//! # View Configuration Module
//!
//! Loads the settings of the booking page from environment variables, with
//! defaults for everything but a malformed value.
//!
//! ## Environment Variables
//!
//! - `DOCSLOT_DOCTORS_FILE`: JSON array of doctor records (default: "doctors.json")
//! - `DOCSLOT_TIMEZONE`: IANA name of the clinic's timezone (default: "UTC")
//! - `DOCSLOT_OPEN_HOUR`: first hour slots are offered (default: 10)
//! - `DOCSLOT_CLOSE_HOUR`: hour at which the last slot must have started (default: 21)
//! - `DOCSLOT_SLOT_MINUTES`: length of a slot in minutes (default: 30)
//! - `DOCSLOT_CURRENCY`: symbol shown in front of fees (default: "$")
//! - `LOG_LEVEL`: logging level (default: "info")

use std::{env, path::PathBuf, str::FromStr};

use chrono_tz::Tz;
use docslot_core::slots::BusinessHours;
use eyre::{Result, WrapErr, eyre};
use tracing::{Level, warn};

use crate::clock::ClinicClock;

/// Configuration for the booking page
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use docslot_view::config::ViewConfig;
///
/// fn example() -> Result<()> {
///     let config = ViewConfig::from_env()?;
///     println!("Reading doctors from {}", config.doctors_file.display());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Location of the doctor directory
    pub doctors_file: PathBuf,

    /// Timezone the clinic's business hours are expressed in
    pub timezone: Tz,

    /// Opening hours and slot length
    pub business_hours: BusinessHours,

    /// Currency symbol for appointment fees
    pub currency_symbol: String,

    /// Log level for the application
    pub log_level: Level,
}

impl ViewConfig {
    /// Creates a new ViewConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - an hour or slot length cannot be parsed as a number
    /// - the business hours are out of range
    /// - the timezone is not a known IANA name
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates a ViewConfig from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let doctors_file = lookup("DOCSLOT_DOCTORS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("doctors.json"));

        let timezone_name = lookup("DOCSLOT_TIMEZONE").unwrap_or_else(|| "UTC".to_string());
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|e| eyre!("Invalid DOCSLOT_TIMEZONE value {}: {}", timezone_name, e))?;

        // Business hours
        let business_hours = BusinessHours::new(
            parse_or(&lookup, "DOCSLOT_OPEN_HOUR", 10)?,
            parse_or(&lookup, "DOCSLOT_CLOSE_HOUR", 21)?,
            parse_or(&lookup, "DOCSLOT_SLOT_MINUTES", 30)?,
        );
        business_hours
            .validate()
            .wrap_err("Invalid business hours")?;
        if business_hours.is_degenerate() {
            warn!(
                "Closing hour {} is not after opening hour {}, no slots will be offered",
                business_hours.close_hour, business_hours.open_hour
            );
        }

        let currency_symbol = lookup("DOCSLOT_CURRENCY").unwrap_or_else(|| "$".to_string());

        let log_level = Self::log_level_from_lookup(&lookup);

        Ok(Self {
            doctors_file,
            timezone,
            business_hours,
            currency_symbol,
            log_level,
        })
    }

    /// Reads only `LOG_LEVEL`, so tracing can be installed before the rest of
    /// the configuration is loaded and its warnings are not lost.
    pub fn log_level_from_env() -> Level {
        Self::log_level_from_lookup(|key| env::var(key).ok())
    }

    /// Log level from an arbitrary key lookup, `info` when unset or unknown
    pub fn log_level_from_lookup<F>(lookup: F) -> Level
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Clock reading wall-clock time in the clinic's timezone
    pub fn clock(&self) -> ClinicClock {
        ClinicClock::new(self.timezone)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value", key)),
        None => Ok(default),
    }
}
