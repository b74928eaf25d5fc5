mod view;

pub use view::SettingsView;
