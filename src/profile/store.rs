use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::debug;

use crate::config::AppPaths;
use crate::error::{AppError, AppResult};

/// Persistence seam for profile documents.
pub trait ProfileStore: Send + Sync {
    fn read(&self, profile: &str) -> AppResult<Option<Value>>;
    fn write(&self, profile: &str, document: &Value) -> AppResult<()>;
    fn remove(&self, profile: &str) -> AppResult<()>;
    fn list(&self) -> AppResult<Vec<String>>;
}

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    paths: AppPaths,
}

impl FileProfileStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    pub fn discover() -> AppResult<Self> {
        Ok(Self::new(AppPaths::discover()?))
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    fn checked_file(&self, profile: &str) -> AppResult<PathBuf> {
        if profile.contains(['/', '\\', '\0']) || profile.contains("..") {
            return Err(AppError::InvalidInput(format!(
                "profile name `{profile}` cannot be used as a file name"
            )));
        }

        Ok(self.paths.settings_file(profile))
    }
}

impl ProfileStore for FileProfileStore {
    fn read(&self, profile: &str) -> AppResult<Option<Value>> {
        let path = self.checked_file(profile)?;
        if !path.exists() {
            debug!(profile, path = %path.display(), "no saved profile document");
            return Ok(None);
        }

        let raw = fs::read_to_string(path)?;
        let document = serde_json::from_str(&raw)?;
        Ok(Some(document))
    }

    fn write(&self, profile: &str, document: &Value) -> AppResult<()> {
        let path = self.checked_file(profile)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(document)?;
        fs::write(&path, payload)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    fn remove(&self, profile: &str) -> AppResult<()> {
        let path = self.checked_file(profile)?;
        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }

    fn list(&self) -> AppResult<Vec<String>> {
        let dir = self.paths.profiles_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Keeps documents in process memory only.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    documents: Mutex<BTreeMap<String, Value>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn documents(&self) -> MutexGuard<'_, BTreeMap<String, Value>> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProfileStore for MemoryProfileStore {
    fn read(&self, profile: &str) -> AppResult<Option<Value>> {
        Ok(self.documents().get(profile).cloned())
    }

    fn write(&self, profile: &str, document: &Value) -> AppResult<()> {
        self.documents()
            .insert(profile.to_string(), document.clone());
        Ok(())
    }

    fn remove(&self, profile: &str) -> AppResult<()> {
        self.documents().remove(profile);
        Ok(())
    }

    fn list(&self) -> AppResult<Vec<String>> {
        Ok(self.documents().keys().cloned().collect())
    }
}
