use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use intake_core::models::{AssessmentResponse, AssessmentType};

use crate::error::StoreError;

/// The full persisted state: both collections, serialized together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    pub assessment_types: Vec<AssessmentType>,
    pub responses: Vec<AssessmentResponse>,
}

/// The persistence collaborator boundary. `load` runs once at open;
/// `save` receives the full updated state after every mutation.
pub trait Snapshot: Send + Sync {
    /// Returns `Ok(None)` when no snapshot exists yet.
    fn load(&self) -> Result<Option<StoreState>, StoreError>;

    fn save(&self, state: &StoreState) -> Result<(), StoreError>;
}

/// Pretty-printed JSON in a single file.
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Snapshot for JsonFileSnapshot {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        let as_io = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(as_io)?;
        let state: StoreState = serde_json::from_str(&contents)?;
        info!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(state))
    }

    fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        let as_io = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(as_io)?;
        }

        let json = serde_json::to_string_pretty(state)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(as_io)?;
        std::fs::rename(&tmp_path, &self.path).map_err(as_io)?;

        info!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}

/// Keeps nothing. For embedding the store purely in memory.
pub struct NullSnapshot;

impl Snapshot for NullSnapshot {
    fn load(&self) -> Result<Option<StoreState>, StoreError> {
        Ok(None)
    }

    fn save(&self, _state: &StoreState) -> Result<(), StoreError> {
        Ok(())
    }
}
