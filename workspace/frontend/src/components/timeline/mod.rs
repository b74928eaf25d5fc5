mod chart;
pub mod series;

pub use chart::TimelineChart;
