//! Risk classification to visual encoding: fixed color table per risk level
//! and a clamped marker radius derived from the PM2.5 reading. Pure and
//! deterministic; every renderer goes through these two functions so the
//! encoding stays identical regardless of which toolkit draws the pixels.

use common::RiskLevel;

const COLOR_HIGH: &str = "#c0392b";
const COLOR_MEDIUM: &str = "#f39c12";
const COLOR_LOW: &str = "#27ae60";
const COLOR_FALLBACK: &str = "#7f8c8d";

const RADIUS_MIN: f64 = 5.0;
const RADIUS_MAX: f64 = 20.0;

/// Marker color for a risk level. Total over the enum: anything outside the
/// known Low/Medium/High set already collapsed to `Unknown` during
/// deserialization and gets the neutral fallback color.
pub fn color_for(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => COLOR_HIGH,
        RiskLevel::Medium => COLOR_MEDIUM,
        RiskLevel::Low => COLOR_LOW,
        RiskLevel::Unknown => COLOR_FALLBACK,
    }
}

/// Marker radius in display units: `min(20, 5 + pm25/20)`.
///
/// The floor keeps markers visible at clean-air readings, the ceiling stops
/// unbounded growth at extreme ones. Missing or non-finite readings count
/// as 0 so NaN never reaches the renderer.
pub fn radius_for(pm25: Option<f64>) -> f64 {
    let pm25 = match pm25 {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    };
    (RADIUS_MIN + pm25 / 20.0).min(RADIUS_MAX)
}
