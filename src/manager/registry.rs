use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use tracing::debug;

use crate::error::AppResult;
use crate::profile::sanitize_profile_name;

type CreateProfileFn<P> = Box<dyn Fn(&str) -> AppResult<P>>;

/// Registry of named profiles with one current selection.
///
/// Profiles are created on first request through the creation callback and
/// live as long as the manager. Every name goes through
/// [`sanitize_profile_name`] before it touches the registry.
pub struct ProfileManagerCore<P> {
    current_profile_name: String,
    profiles: HashMap<String, P>,
    create_profile: CreateProfileFn<P>,
}

impl<P> ProfileManagerCore<P> {
    /// Records the initial selection. No profile is created here.
    pub fn new<F>(profile_name: &str, create_profile: F) -> Self
    where
        F: Fn(&str) -> AppResult<P> + 'static,
    {
        Self {
            current_profile_name: sanitize_profile_name(profile_name),
            profiles: HashMap::new(),
            create_profile: Box::new(create_profile),
        }
    }

    pub fn current_profile_name(&self) -> &str {
        &self.current_profile_name
    }

    pub fn get_profile(&mut self, profile_name: &str) -> AppResult<&mut P> {
        let name = sanitize_profile_name(profile_name);

        match self.profiles.entry(name) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                debug!(profile = %entry.key(), "creating profile");
                let created = (self.create_profile)(entry.key())?;
                Ok(entry.insert(created))
            }
        }
    }

    pub fn get_current_profile(&mut self) -> AppResult<&mut P> {
        let name = self.current_profile_name.clone();
        self.get_profile(&name)
    }

    /// Switches the current selection.
    ///
    /// With `load_if_needed` the current profile is materialized and handed to
    /// `ensure_loaded`, whose result is discarded; errors still propagate.
    /// Without it nothing is created or loaded.
    pub fn set_current_profile<F, R>(
        &mut self,
        profile_name: &str,
        load_if_needed: bool,
        ensure_loaded: F,
    ) -> AppResult<()>
    where
        F: FnOnce(&mut P) -> AppResult<R>,
    {
        self.current_profile_name = sanitize_profile_name(profile_name);
        debug!(profile = %self.current_profile_name, load_if_needed, "current profile changed");

        if load_if_needed {
            ensure_loaded(self.get_current_profile()?)?;
        }

        Ok(())
    }

    /// Whether the profile has been materialized. Never creates one.
    pub fn contains_profile(&self, profile_name: &str) -> bool {
        self.profiles
            .contains_key(&sanitize_profile_name(profile_name))
    }

    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<P> fmt::Debug for ProfileManagerCore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileManagerCore")
            .field("current_profile_name", &self.current_profile_name)
            .field("profiles", &self.profile_names())
            .finish_non_exhaustive()
    }
}
