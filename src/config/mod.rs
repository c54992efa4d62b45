pub mod paths;

pub use paths::AppPaths;

use std::path::PathBuf;

use crate::error::AppResult;

/// Resolves profile paths under `root` when given, otherwise under the platform config dir.
pub fn resolve_paths(root: Option<PathBuf>) -> AppResult<AppPaths> {
    match root {
        Some(root) => AppPaths::at(root),
        None => AppPaths::discover(),
    }
}
