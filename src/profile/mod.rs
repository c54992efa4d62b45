pub mod data;
pub mod name;
pub mod settings;
pub mod store;
pub mod typed;

pub use data::SettingsData;
pub use name::{DEFAULT_PROFILE_NAME, sanitize_profile_name};
pub use settings::SettingsProfile;
pub use store::{FileProfileStore, MemoryProfileStore, ProfileStore};
pub use typed::{DefaultsFn, TypedProfile};
