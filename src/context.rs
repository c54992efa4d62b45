use std::path::PathBuf;
use std::sync::Arc;

use crate::config;
use crate::error::AppResult;
use crate::manager::ProfileManager;
use crate::output::Output;
use crate::profile::{FileProfileStore, ProfileStore, SettingsProfile};

#[derive(Debug)]
pub struct AppContext {
    pub store: Arc<FileProfileStore>,
    pub profiles: ProfileManager,
    pub output: Output,
}

impl AppContext {
    /// Selects and loads the requested profile.
    pub fn bootstrap(profile: String, root: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = config::resolve_paths(root)?;
        let store = Arc::new(FileProfileStore::new(paths));
        let shared: Arc<dyn ProfileStore> = store.clone();

        let mut profiles = ProfileManager::new(&profile, shared);
        profiles.set_current_profile(&profile, true)?;

        Ok(Self {
            store,
            profiles,
            output: Output::new(json),
        })
    }

    pub fn profile(&mut self) -> AppResult<&mut SettingsProfile> {
        self.profiles.get_current_profile()
    }

    pub fn profile_name(&self) -> &str {
        self.profiles.current_profile_name()
    }
}
