//! Repository adapters for persistence layer

use std::path::PathBuf;

use touring_infra::persistence::FileTripStateRepository;
use touring_types::Result;

use crate::config::Config;

/// Open the file-based state repository, or `None` when inputs are not remembered
pub fn open_state_repo(config: &Config) -> Result<Option<FileTripStateRepository>> {
    if !config.remember_inputs {
        tracing::debug!("remember_inputs is off, state will not be read or written");
        return Ok(None);
    }
    let state_dir = config.state_dir()?;
    Ok(Some(FileTripStateRepository::open(state_dir)))
}

/// Open the file-based state repository at a custom directory
pub fn open_state_repo_at(state_dir: PathBuf) -> FileTripStateRepository {
    FileTripStateRepository::open(state_dir)
}
