use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::core::GameState;

/// Single-slot save file holding a bincode-encoded [`GameState`].
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a snapshot, replacing any previous save.
    pub fn save(&self, state: &GameState) -> anyhow::Result<()> {
        let bytes = bincode::serialize(state)?;
        fs::write(&self.path, bytes)?;
        info!("Game saved to {}", self.path.display());
        Ok(())
    }

    /// Load the saved snapshot.
    ///
    /// A missing, empty, unreadable or corrupt file all mean "no saved game".
    pub fn load(&self) -> Option<GameState> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read save file {}: {}", self.path.display(), e);
                return None;
            }
        };
        if bytes.is_empty() {
            return None;
        }
        match bincode::deserialize::<GameState>(&bytes) {
            Ok(state) if state.is_consistent() => Some(state),
            Ok(_) => {
                warn!("Ignoring inconsistent save file {}", self.path.display());
                None
            }
            Err(e) => {
                warn!("Ignoring corrupt save file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Remove the save file. Missing files are not an error.
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
