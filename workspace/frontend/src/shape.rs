//! Shapes raw API JSON into the internal data model consumed by renderers.
//!
//! `None` in means "not loaded yet" and yields `None` out, which renderers
//! treat as "nothing to draw", not as a fault. A structurally malformed
//! payload is logged and also yields `None`: on a monitoring display a stale
//! or empty panel beats a hard failure.

use common::{Forecast, Summary};
use serde_json::Value;

/// Shapes a raw `/forecast` payload. Timeline order is whatever the API
/// sent; nothing here sorts, dedupes, or fills gaps.
pub fn shape_forecast(raw: Option<Value>) -> Option<Forecast> {
    shape(raw, "forecast")
}

/// Shapes a raw `/summary` payload.
pub fn shape_summary(raw: Option<Value>) -> Option<Summary> {
    shape(raw, "summary")
}

fn shape<T>(raw: Option<Value>, what: &str) -> Option<T>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let raw = raw.filter(|value| !value.is_null())?;
    match serde_json::from_value(raw) {
        Ok(shaped) => Some(shaped),
        Err(err) => {
            log::warn!("Discarding malformed {} payload: {}", what, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::RiskLevel;
    use serde_json::json;

    #[test]
    fn test_absent_payload_shapes_to_none() {
        assert_eq!(shape_forecast(None), None);
        assert_eq!(shape_forecast(Some(Value::Null)), None);
        assert_eq!(shape_summary(None), None);
        assert_eq!(shape_summary(Some(Value::Null)), None);
    }

    #[test]
    fn test_malformed_payload_shapes_to_none_without_panicking() {
        assert_eq!(shape_forecast(Some(json!({"locations": "oops"}))), None);
        assert_eq!(shape_forecast(Some(json!([1, 2, 3]))), None);
    }

    #[test]
    fn test_timeline_entries_preserved_in_order_with_gaps() {
        let shaped = shape_forecast(Some(json!({
            "timeline": [
                {"date": "2024-01-01", "obs": 5.0},
                {"date": "2024-01-02", "pred_median": 7.0, "p10": 4.0, "p90": 10.0}
            ]
        })))
        .expect("payload should shape");

        assert_eq!(shaped.timeline.len(), 2);
        assert_eq!(shaped.timeline[0].date.to_string(), "2024-01-01");
        assert_eq!(shaped.timeline[0].obs, Some(5.0));
        assert_eq!(shaped.timeline[0].pred_median, None);
        assert_eq!(shaped.timeline[1].date.to_string(), "2024-01-02");
        assert_eq!(shaped.timeline[1].obs, None);
        assert_eq!(shaped.timeline[1].p90, Some(10.0));
    }

    #[test]
    fn test_location_optionality_preserved_at_shaping_time() {
        let shaped = shape_forecast(Some(json!({
            "locations": [{"lat": 26.9, "lon": 75.8, "pm25": 120.0, "risk": "High"}]
        })))
        .expect("payload should shape");

        assert_eq!(shaped.locations.len(), 1);
        // Defaulting the label happens at render time, not here.
        assert_eq!(shaped.locations[0].name, None);
        assert_eq!(shaped.locations[0].risk, RiskLevel::High);
    }

    #[test]
    fn test_summary_round_trip() {
        let shaped = shape_summary(Some(json!({
            "city": "Jaipur",
            "current_pm25": 82.0,
            "recent_rain_mm": 0.0,
            "risk_level": "Medium"
        })))
        .expect("payload should shape");

        assert_eq!(shaped.city.as_deref(), Some("Jaipur"));
        assert_eq!(shaped.current_pm25, Some(82.0));
        assert_eq!(shaped.risk_level, RiskLevel::Medium);
    }
}
