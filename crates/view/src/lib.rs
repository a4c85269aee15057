//! # docslot view
//!
//! The appointment page of a single doctor: profile, a week of bookable slots
//! and the booking action.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Booking view**: page state and the operations that change it
//! - **Render**: render model and its terminal rendering
//! - **Shell**: reads commands and drives the booking view
//! - **Config**: environment configuration of the page
//!
//! The doctor directory and the booking endpoint are injected through the
//! traits of `docslot-directory`; nothing here owns global state.

/// Page state and selection handling
pub mod booking_view;
/// Sources of the current moment
pub mod clock;
/// Configuration module for page settings
pub mod config;
/// Render model and text rendering
pub mod render;
/// Interactive command loop
pub mod shell;

use std::io;

use docslot_directory::{SharedDirectory, repositories::booking::BookingSubmitter};
use eyre::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::{booking_view::BookingView, clock::Clock};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they do not interleave with the rendered page.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Opens the booking page for `doctor_id` and runs it on stdin and stdout
///
/// # Arguments
///
/// * `config` - page configuration, including business hours and timezone
/// * `directory` - doctors already loaded by the caller
/// * `submitter` - receives confirmed bookings
/// * `doctor_id` - doctor whose page is opened first
pub async fn start_view(
    config: config::ViewConfig,
    directory: SharedDirectory,
    submitter: &dyn BookingSubmitter,
    doctor_id: &str,
) -> Result<()> {
    let clock = config.clock();
    let mut view = BookingView::open(directory, doctor_id, clock.now(), config.business_hours);
    info!("Opened booking page for {} in {}", doctor_id, config.timezone.name());

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_interactive(
        stdin.lock(),
        stdout.lock(),
        &mut view,
        submitter,
        &clock,
        &config.currency_symbol,
    )
    .await
}
