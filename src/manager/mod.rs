//! Named-profile registries.
//!
//! [`ProfileManagerCore`] owns naming, lazy creation and the current
//! selection. [`ProfileManager`] and [`TypedProfileManager`] only choose how a
//! profile is built and what "loaded" means for it.

pub mod registry;
pub mod typed;
pub mod untyped;

pub use registry::ProfileManagerCore;
pub use typed::TypedProfileManager;
pub use untyped::ProfileManager;
