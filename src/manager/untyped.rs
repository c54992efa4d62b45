use std::sync::Arc;

use crate::error::AppResult;
use crate::profile::{ProfileStore, SettingsProfile};

use super::registry::ProfileManagerCore;

/// Manages named key/value [`SettingsProfile`]s.
#[derive(Debug)]
pub struct ProfileManager {
    core: ProfileManagerCore<SettingsProfile>,
}

impl ProfileManager {
    pub fn new(profile_name: &str, store: Arc<dyn ProfileStore>) -> Self {
        let core = ProfileManagerCore::new(profile_name, move |name| {
            Ok(SettingsProfile::new(name, Arc::clone(&store)))
        });

        Self { core }
    }

    pub fn current_profile_name(&self) -> &str {
        self.core.current_profile_name()
    }

    pub fn get_profile(&mut self, profile_name: &str) -> AppResult<&mut SettingsProfile> {
        self.core.get_profile(profile_name)
    }

    pub fn get_current_profile(&mut self) -> AppResult<&mut SettingsProfile> {
        self.core.get_current_profile()
    }

    pub fn set_current_profile(
        &mut self,
        profile_name: &str,
        load_if_needed: bool,
    ) -> AppResult<()> {
        self.core
            .set_current_profile(profile_name, load_if_needed, |profile| {
                profile.get_or_load().map(|_| ())
            })
    }

    pub fn contains_profile(&self, profile_name: &str) -> bool {
        self.core.contains_profile(profile_name)
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.core.profile_names()
    }
}
