pub mod repositories;

pub mod mock;

use std::path::Path;
use std::sync::Arc;

use eyre::{Result, WrapErr};
use tracing::info;

use repositories::doctor::{DoctorDirectory, InMemoryDirectory};

pub type SharedDirectory = Arc<dyn DoctorDirectory>;

pub async fn load_directory(path: impl AsRef<Path>) -> Result<InMemoryDirectory> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read doctor directory {}", path.display()))?;

    let directory = InMemoryDirectory::from_json(&raw)
        .wrap_err_with(|| format!("Invalid doctor directory {}", path.display()))?;

    info!("Loaded {} doctors from {}", directory.len(), path.display());
    Ok(directory)
}
