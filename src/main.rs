use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use docslot_directory::{
    SharedDirectory, load_directory,
    repositories::{booking::RecordingSubmitter, doctor::DoctorDirectory},
};
use docslot_view::config::ViewConfig;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging before the configuration so its warnings are kept
    docslot_view::init_tracing(ViewConfig::log_level_from_env())?;

    // Load configuration
    let config = ViewConfig::from_env()?;

    // Load the doctor directory
    let directory: SharedDirectory = Arc::new(load_directory(&config.doctors_file).await?);

    // Open the requested doctor, or the first one listed
    let doctor_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => directory
            .list()
            .first()
            .map(|doctor| doctor.id.clone())
            .ok_or_else(|| eyre!("{} lists no doctors", config.doctors_file.display()))?,
    };

    let submitter = RecordingSubmitter::new();
    docslot_view::start_view(config, directory, &submitter, &doctor_id).await?;

    Ok(())
}
