pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod manager;
pub mod output;
pub mod profile;
pub mod service;

use cli::Cli;
use error::AppResult;

pub use manager::{ProfileManager, ProfileManagerCore, TypedProfileManager};
pub use profile::{
    DEFAULT_PROFILE_NAME, FileProfileStore, MemoryProfileStore, ProfileStore, SettingsData,
    SettingsProfile, TypedProfile, sanitize_profile_name,
};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
