//! Process-wide settings access in the style of a preferences API.
//!
//! The service owns a single [`SettingsProfile`], created and loaded on first
//! use under [`DEFAULT_PROFILE_NAME`]. Embedders call [`initialize`] during
//! startup to pay the load cost up front, and [`configure`] beforehand to pick
//! a store other than the platform config directory.
//!
//! Getters and [`has_key`] make sure the profile has been read from storage.
//! Setters and deletions write straight to the in-memory data. Nothing is
//! persisted until [`save`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppResult;
use crate::profile::{
    DEFAULT_PROFILE_NAME, FileProfileStore, ProfileStore, SettingsProfile, sanitize_profile_name,
};

struct ServiceState {
    store: Option<Arc<dyn ProfileStore>>,
    profile: Option<SettingsProfile>,
}

static SERVICE: Mutex<ServiceState> = Mutex::new(ServiceState {
    store: None,
    profile: None,
});

fn state() -> MutexGuard<'static, ServiceState> {
    SERVICE.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ServiceState {
    fn store(&mut self) -> AppResult<Arc<dyn ProfileStore>> {
        if let Some(store) = &self.store {
            return Ok(Arc::clone(store));
        }

        let store: Arc<dyn ProfileStore> = Arc::new(FileProfileStore::discover()?);
        self.store = Some(Arc::clone(&store));
        Ok(store)
    }

    fn create_and_load(&mut self, profile_name: &str) -> AppResult<SettingsProfile> {
        let mut profile = SettingsProfile::new(sanitize_profile_name(profile_name), self.store()?);
        profile.load()?;
        Ok(profile)
    }

    fn profile(&mut self) -> AppResult<&mut SettingsProfile> {
        let profile = match self.profile.take() {
            Some(profile) => profile,
            None => self.create_and_load(DEFAULT_PROFILE_NAME)?,
        };

        Ok(self.profile.insert(profile))
    }
}

fn with_profile<R>(f: impl FnOnce(&mut SettingsProfile) -> AppResult<R>) -> AppResult<R> {
    let mut state = state();
    f(state.profile()?)
}

/// Sets the store used for profiles created from now on.
pub fn configure(store: Arc<dyn ProfileStore>) {
    state().store = Some(store);
}

/// Creates and loads the current profile if that has not happened yet.
pub fn initialize() -> AppResult<()> {
    with_profile(|profile| profile.get_or_load().map(|_| ()))
}

/// `None` until the profile has been created.
pub fn current_profile_name() -> Option<String> {
    state()
        .profile
        .as_ref()
        .map(|profile| profile.name().to_string())
}

/// Replaces the current profile with a freshly loaded one. Unsaved changes
/// on the previous profile are dropped.
pub fn set_profile(profile_name: &str) -> AppResult<()> {
    let mut state = state();
    let profile = state.create_and_load(profile_name)?;
    debug!(profile = %profile.name(), "settings service switched profile");
    state.profile = Some(profile);
    Ok(())
}

/// Drops the current profile and any configured store.
pub fn reset() {
    let mut state = state();
    state.profile = None;
    state.store = None;
}

pub fn has_key(key: &str) -> AppResult<bool> {
    with_profile(|profile| Ok(profile.get_or_load()?.has_key(key)))
}

pub fn delete_key(key: &str) -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().delete_key(key);
        Ok(())
    })
}

pub fn delete_all() -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().delete_all();
        Ok(())
    })
}

pub fn get_string(key: &str, default: &str) -> AppResult<String> {
    with_profile(|profile| Ok(profile.get_or_load()?.get_string(key, default)))
}

pub fn get_int(key: &str, default: i64) -> AppResult<i64> {
    with_profile(|profile| Ok(profile.get_or_load()?.get_int(key, default)))
}

pub fn get_float(key: &str, default: f64) -> AppResult<f64> {
    with_profile(|profile| Ok(profile.get_or_load()?.get_float(key, default)))
}

pub fn get_bool(key: &str, default: bool) -> AppResult<bool> {
    with_profile(|profile| Ok(profile.get_or_load()?.get_bool(key, default)))
}

pub fn get<T: DeserializeOwned>(key: &str, default: T) -> AppResult<T> {
    with_profile(|profile| Ok(profile.get_or_load()?.get(key, default)))
}

pub fn set_string(key: &str, value: &str) -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().set_string(key, value);
        Ok(())
    })
}

pub fn set_int(key: &str, value: i64) -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().set_int(key, value);
        Ok(())
    })
}

pub fn set_float(key: &str, value: f64) -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().set_float(key, value);
        Ok(())
    })
}

pub fn set_bool(key: &str, value: bool) -> AppResult<()> {
    with_profile(|profile| {
        profile.value_mut().set_bool(key, value);
        Ok(())
    })
}

pub fn set<T: Serialize>(key: &str, value: T) -> AppResult<()> {
    with_profile(|profile| profile.value_mut().set(key, value))
}

/// Persists the current profile. Does nothing if no profile was ever created.
pub fn save() -> AppResult<()> {
    match state().profile.as_ref() {
        Some(profile) => profile.save(),
        None => Ok(()),
    }
}
