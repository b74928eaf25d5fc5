//! Data model shared across the EnvHealth dashboard.
//! These structs mirror the EnvHealth API's `/summary` and `/forecast`
//! response payloads so the frontend can deserialize API responses without
//! duplicating shapes.
//!
//! Deserialization is deliberately lenient: a monitoring display should
//! degrade to "field absent" rather than reject a whole payload because one
//! value came back null or mistyped.

mod de;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical health-risk classification attached to a location or to the
/// overall summary. Anything the API sends outside the known set collapses
/// into `Unknown` instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Snapshot of current conditions, replaced wholesale on every fetch cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub city: Option<String>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub current_pm25: Option<f64>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub recent_rain_mm: Option<f64>,
    #[serde(deserialize_with = "de::lenient_risk")]
    pub risk_level: RiskLevel,
}

/// One monitored or forecast point on the map. Immutable once received;
/// a missing `name` stays `None` here and is defaulted at render time only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub pm25: Option<f64>,
    #[serde(deserialize_with = "de::lenient_risk")]
    pub risk: RiskLevel,
}

/// One entry of the forecast timeline. The sequence order is chronological
/// and meaningful; consumers must never re-sort it. Absent measurements stay
/// absent and render as gaps, not zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub obs: Option<f64>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub pred_median: Option<f64>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub p10: Option<f64>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub p90: Option<f64>,
}

impl Default for TimelinePoint {
    fn default() -> Self {
        Self {
            date: NaiveDate::default(),
            obs: None,
            pred_median: None,
            p10: None,
            p90: None,
        }
    }
}

/// Short-horizon outlook attached to the forecast payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Next24h {
    #[serde(deserialize_with = "de::lenient_f64")]
    pub pm25_median: Option<f64>,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub estimated_admissions: Option<i64>,
    pub confidence: Option<String>,
}

/// Full forecast payload: map locations plus the chart timeline. Owns its
/// entries exclusively and is replaced wholesale on the next fetch cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub locations: Vec<Location>,
    pub timeline: Vec<TimelinePoint>,
    pub next24h: Option<Next24h>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_level_known_values() {
        for (raw, expected) in [
            ("Low", RiskLevel::Low),
            ("Medium", RiskLevel::Medium),
            ("High", RiskLevel::High),
        ] {
            let parsed: RiskLevel = serde_json::from_value(json!(raw)).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_risk_level_unrecognized_falls_back_to_unknown() {
        let parsed: RiskLevel = serde_json::from_value(json!("Catastrophic")).unwrap();
        assert_eq!(parsed, RiskLevel::Unknown);
    }

    #[test]
    fn test_summary_with_null_pm25() {
        let summary: Summary = serde_json::from_value(json!({
            "city": "Delhi",
            "current_pm25": null,
            "recent_rain_mm": 3.5,
            "risk_level": "Unknown"
        }))
        .unwrap();

        assert_eq!(summary.city.as_deref(), Some("Delhi"));
        assert_eq!(summary.current_pm25, None);
        assert_eq!(summary.recent_rain_mm, Some(3.5));
        assert_eq!(summary.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_summary_tolerates_mistyped_numeric_fields() {
        let summary: Summary = serde_json::from_value(json!({
            "current_pm25": "not a number",
            "risk_level": 42
        }))
        .unwrap();

        assert_eq!(summary.current_pm25, None);
        assert_eq!(summary.risk_level, RiskLevel::Unknown);
    }

    #[test]
    fn test_location_without_name_stays_unnamed() {
        let location: Location = serde_json::from_value(json!({
            "lat": 26.9124,
            "lon": 75.7873,
            "pm25": 120.0,
            "risk": "High"
        }))
        .unwrap();

        assert_eq!(location.name, None);
        assert_eq!(location.pm25, Some(120.0));
        assert_eq!(location.risk, RiskLevel::High);
    }

    #[test]
    fn test_timeline_order_and_absent_fields_preserved() {
        let forecast: Forecast = serde_json::from_value(json!({
            "timeline": [
                {"date": "2024-01-01", "obs": 5.0},
                {"date": "2024-01-02", "pred_median": 7.0, "p10": 4.0, "p90": 10.0}
            ]
        }))
        .unwrap();

        assert_eq!(forecast.timeline.len(), 2);
        let first = &forecast.timeline[0];
        assert_eq!(first.date.to_string(), "2024-01-01");
        assert_eq!(first.obs, Some(5.0));
        assert_eq!(first.pred_median, None);
        assert_eq!(first.p10, None);
        assert_eq!(first.p90, None);

        let second = &forecast.timeline[1];
        assert_eq!(second.date.to_string(), "2024-01-02");
        assert_eq!(second.obs, None);
        assert_eq!(second.pred_median, Some(7.0));
        assert_eq!(second.p10, Some(4.0));
        assert_eq!(second.p90, Some(10.0));
    }

    #[test]
    fn test_forecast_defaults_missing_collections_to_empty() {
        let forecast: Forecast = serde_json::from_value(json!({})).unwrap();
        assert!(forecast.locations.is_empty());
        assert!(forecast.timeline.is_empty());
        assert_eq!(forecast.next24h, None);
    }

    #[test]
    fn test_next24h_payload() {
        let forecast: Forecast = serde_json::from_value(json!({
            "next24h": {
                "pm25_median": 80.0,
                "estimated_admissions": 8,
                "confidence": "Medium"
            }
        }))
        .unwrap();

        let next24h = forecast.next24h.expect("next24h should parse");
        assert_eq!(next24h.pm25_median, Some(80.0));
        assert_eq!(next24h.estimated_admissions, Some(8));
        assert_eq!(next24h.confidence.as_deref(), Some("Medium"));
    }
}
