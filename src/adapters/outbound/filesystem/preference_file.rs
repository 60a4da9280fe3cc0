use crate::ports::outbound::PreferenceStore;
use crate::shared::error::ObservesError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// File name of the preference file inside the store directory
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
    #[serde(default)]
    dont_ask_again_upload_warning: bool,
}

/// JsonPreferenceFile adapter keeping user preferences in
/// `<store_dir>/preferences.json`
pub struct JsonPreferenceFile {
    path: PathBuf,
}

impl JsonPreferenceFile {
    pub fn new(store_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: store_dir.into().join(PREFERENCES_FILE_NAME),
        }
    }

    fn load(&self) -> Result<Preferences> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Ok(Preferences::default());
        }

        validate_regular_file(&self.path, "preference file")?;
        let content = fs::read_to_string(&self.path).map_err(|e| ObservesError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, content).map_err(|e| ObservesError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceFile {
    fn dont_ask_again_upload_warning(&self) -> Result<bool> {
        Ok(self.load()?.dont_ask_again_upload_warning)
    }

    fn set_dont_ask_again_upload_warning(&self, value: bool) -> Result<()> {
        let mut preferences = self.load()?;
        preferences.dont_ask_again_upload_warning = value;
        self.save(&preferences)
    }
}
