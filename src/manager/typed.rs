use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::AppResult;
use crate::profile::{DefaultsFn, ProfileStore, TypedProfile};

use super::registry::ProfileManagerCore;

/// Manages named [`TypedProfile`]s that share one defaults function.
#[derive(Debug)]
pub struct TypedProfileManager<T> {
    core: ProfileManagerCore<TypedProfile<T>>,
}

impl<T> TypedProfileManager<T>
where
    T: Default + Serialize + DeserializeOwned + 'static,
{
    /// Seeds new profiles with `T::default()`.
    pub fn new(profile_name: &str, store: Arc<dyn ProfileStore>) -> Self {
        Self::with_defaults(profile_name, T::default, store)
    }

    pub fn with_defaults<D>(profile_name: &str, defaults: D, store: Arc<dyn ProfileStore>) -> Self
    where
        D: Fn() -> T + 'static,
    {
        let defaults: DefaultsFn<T> = Rc::new(defaults);
        let core = ProfileManagerCore::new(profile_name, move |name| {
            Ok(TypedProfile::new(name, Rc::clone(&defaults), Arc::clone(&store)))
        });

        Self { core }
    }

    pub fn current_profile_name(&self) -> &str {
        self.core.current_profile_name()
    }

    pub fn get_profile(&mut self, profile_name: &str) -> AppResult<&mut TypedProfile<T>> {
        self.core.get_profile(profile_name)
    }

    pub fn get_current_profile(&mut self) -> AppResult<&mut TypedProfile<T>> {
        self.core.get_current_profile()
    }

    pub fn set_current_profile(
        &mut self,
        profile_name: &str,
        load_if_needed: bool,
    ) -> AppResult<()> {
        self.core
            .set_current_profile(profile_name, load_if_needed, |profile| {
                profile.get_value().map(|_| ())
            })
    }

    pub fn contains_profile(&self, profile_name: &str) -> bool {
        self.core.contains_profile(profile_name)
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.core.profile_names()
    }
}
