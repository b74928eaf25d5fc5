pub mod common;
pub mod dashboard;
pub mod layout;
pub mod map;
pub mod settings;
pub mod timeline;
