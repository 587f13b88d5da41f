//! File-based trip state repository implementation

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use touring_domain::repository::TripStateRepository;
use touring_domain::TripState;
use touring_types::{Error, Result};

/// Stores the trip state as a pretty-printed JSON file
pub struct FileTripStateRepository {
    state_path: PathBuf,
}

impl FileTripStateRepository {
    pub const FILE_NAME: &'static str = "state.json";

    /// Use `<state_dir>/state.json`; the directory is created on first save
    pub fn open(state_dir: PathBuf) -> Self {
        Self {
            state_path: state_dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.state_path
    }
}

impl TripStateRepository for FileTripStateRepository {
    fn load(&self) -> Result<TripState> {
        let file = match File::open(&self.state_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.state_path.display(), "no stored state");
                return Ok(TripState::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        match serde_json::from_reader::<_, TripState>(BufReader::new(file)) {
            Ok(state) => {
                tracing::debug!(path = %self.state_path.display(), "loaded stored state");
                Ok(state)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.state_path.display(),
                    error = %e,
                    "stored state is unreadable, starting fresh"
                );
                Ok(TripState::default())
            }
        }
    }

    fn save(&self, state: &TripState) -> Result<()> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then swap it in
        let tmp_path = self.state_path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, state)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp_path, &self.state_path)?;
        tracing::debug!(path = %self.state_path.display(), "saved state");
        Ok(())
    }
}
