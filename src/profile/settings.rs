use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppResult;

use super::data::SettingsData;
use super::store::ProfileStore;

/// A named key/value profile backed by a [`ProfileStore`].
pub struct SettingsProfile {
    name: String,
    store: Arc<dyn ProfileStore>,
    data: SettingsData,
    loaded: bool,
}

impl SettingsProfile {
    /// Builds an empty, unloaded profile. Nothing is read until [`load`](Self::load)
    /// or [`get_or_load`](Self::get_or_load).
    pub fn new(name: impl Into<String>, store: Arc<dyn ProfileStore>) -> Self {
        Self {
            name: name.into(),
            store,
            data: SettingsData::new(),
            loaded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Re-reads the persisted document, replacing whatever is in memory.
    pub fn load(&mut self) -> AppResult<()> {
        self.data = match self.store.read(&self.name)? {
            Some(document) => SettingsData::from_document(document)?,
            None => SettingsData::new(),
        };
        self.loaded = true;

        debug!(profile = %self.name, keys = self.data.len(), "loaded settings profile");
        Ok(())
    }

    pub fn get_or_load(&mut self) -> AppResult<&mut SettingsData> {
        if !self.loaded {
            self.load()?;
        }

        Ok(&mut self.data)
    }

    pub fn value(&self) -> &SettingsData {
        &self.data
    }

    pub fn value_mut(&mut self) -> &mut SettingsData {
        &mut self.data
    }

    pub fn save(&self) -> AppResult<()> {
        self.store.write(&self.name, &self.data.to_document()?)?;
        info!(profile = %self.name, keys = self.data.len(), "saved settings profile");
        Ok(())
    }
}

impl fmt::Debug for SettingsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsProfile")
            .field("name", &self.name)
            .field("loaded", &self.loaded)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
