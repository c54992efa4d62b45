pub mod delete;
pub mod get;
pub mod has;
pub mod list;
pub mod set;
pub mod show;
