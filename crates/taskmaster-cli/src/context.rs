use std::path::{Path, PathBuf};
use std::sync::Arc;
use taskmaster_core::AppConfig;
use taskmaster_persistence::{JsonFileStore, Storage};
use taskmaster_state::AppState;

pub struct CliContext {
    pub state: AppState,
    pub config: AppConfig,
    data_dir: PathBuf,
}

impl CliContext {
    /// Open the stores in `data_dir`, falling back to the config file's
    /// directory and then the platform data directory.
    pub fn open(data_dir: Option<PathBuf>) -> Self {
        let config = AppConfig::load();
        let data_dir = data_dir.unwrap_or_else(|| config.effective_data_dir());
        tracing::debug!("Using data directory {}", data_dir.display());

        let store = JsonFileStore::in_dir(&data_dir);
        let state = AppState::open(Storage::new(Arc::new(store)));
        Self {
            state,
            config,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
