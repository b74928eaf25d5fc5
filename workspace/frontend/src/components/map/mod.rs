pub mod markers;
mod view;

pub use view::MapView;
