use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::AppResult;

use super::store::ProfileStore;

/// Produces the value a typed profile holds before anything is loaded.
pub type DefaultsFn<T> = Rc<dyn Fn() -> T>;

/// A named profile holding one structured value.
pub struct TypedProfile<T> {
    name: String,
    store: Arc<dyn ProfileStore>,
    defaults: DefaultsFn<T>,
    value: T,
    loaded: bool,
}

impl<T> TypedProfile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(
        name: impl Into<String>,
        defaults: DefaultsFn<T>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        let value = defaults();
        Self {
            name: name.into(),
            store,
            defaults,
            value,
            loaded: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Re-reads the persisted value. A profile that was never saved gets fresh defaults.
    pub fn load(&mut self) -> AppResult<()> {
        self.value = match self.store.read(&self.name)? {
            Some(document) => serde_json::from_value(document)?,
            None => (self.defaults)(),
        };
        self.loaded = true;

        debug!(profile = %self.name, "loaded typed profile");
        Ok(())
    }

    pub fn get_value(&mut self) -> AppResult<&mut T> {
        if !self.loaded {
            self.load()?;
        }

        Ok(&mut self.value)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Puts the in-memory value back to defaults. Storage is untouched until `save`.
    pub fn reset(&mut self) {
        self.value = (self.defaults)();
    }

    pub fn save(&self) -> AppResult<()> {
        let document = serde_json::to_value(&self.value)?;
        self.store.write(&self.name, &document)?;
        info!(profile = %self.name, "saved typed profile");
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedProfile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedProfile")
            .field("name", &self.name)
            .field("loaded", &self.loaded)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
