use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ventureflow_core::{CoreError, StatePersistence, WizardState};

pub const STATE_FILE_NAME: &str = "wizard_state.json";
pub const STATE_SCHEMA_VERSION: u32 = 1;
const TMP_SUFFIX: &str = "tmp";

/// On-disk wrapper around the serialized wizard state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEnvelope {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: WizardState,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaHeader {
    schema_version: u32,
}

/// Filesystem-backed JSON persistence for the wizard state blob.
#[derive(Debug, Clone)]
pub struct JsonStatePersistence {
    path: PathBuf,
}

impl JsonStatePersistence {
    /// Stores state as `wizard_state.json` inside `base_dir`, creating it if needed.
    pub fn new(base_dir: &Path) -> Result<Self, CoreError> {
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(STATE_FILE_NAME),
        })
    }

    /// Stores state at an explicit file path.
    pub fn with_path(path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the envelope including its metadata.
    pub fn load_envelope(&self) -> Result<Option<StateEnvelope>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let envelope: StateEnvelope =
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?;
        if envelope.schema_version > STATE_SCHEMA_VERSION {
            return Err(CoreError::Storage(format!(
                "wizard state `{}` is from a newer schema version",
                self.path.display()
            )));
        }
        Ok(Some(envelope))
    }

    /// Fails when the file on disk was written by a newer schema. Unreadable
    /// files may be replaced.
    fn ensure_writable(&self) -> Result<(), CoreError> {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return Ok(());
        };
        match serde_json::from_str::<SchemaHeader>(&data) {
            Ok(header) if header.schema_version > STATE_SCHEMA_VERSION => {
                Err(CoreError::Storage(format!(
                    "refusing to overwrite `{}` written by schema version {}",
                    self.path.display(),
                    header.schema_version
                )))
            }
            _ => Ok(()),
        }
    }
}

impl StatePersistence for JsonStatePersistence {
    fn load(&self) -> Result<Option<WizardState>, CoreError> {
        Ok(self.load_envelope()?.map(|envelope| envelope.state))
    }

    fn save(&self, state: &WizardState) -> Result<(), CoreError> {
        self.ensure_writable()?;
        let envelope = StateEnvelope {
            schema_version: STATE_SCHEMA_VERSION,
            saved_at: Utc::now(),
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "wizard state saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
