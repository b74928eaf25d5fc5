mod advisory;
mod summary_panel;
mod view;

pub use view::Dashboard;
