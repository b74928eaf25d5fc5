//! Pure mapping from a forecast to drawable marker specs. One spec per
//! location, in input order, with color and radius taken from the risk
//! classifier. The Leaflet glue in `view.rs` only draws what this produces.

use crate::risk;
use common::{Forecast, RiskLevel};

/// Label used when a location arrives without a name. The data model keeps
/// the name optional; the default is applied here, at render time.
const UNNAMED_LOCATION: &str = "Location";

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub color: &'static str,
    pub radius: f64,
    pub name: String,
    pub pm25: Option<f64>,
    pub risk: RiskLevel,
}

impl MarkerSpec {
    /// Popup body shown on marker interaction: name, PM2.5 reading, risk.
    pub fn popup_html(&self) -> String {
        let pm25 = match self.pm25 {
            Some(value) => format!("{value} µg/m³"),
            None => "n/a".to_string(),
        };
        format!(
            "<div class=\"text-sm\"><div><strong>{}</strong></div>\
             <div>PM2.5: {}</div><div>Risk: {}</div></div>",
            self.name, pm25, self.risk
        )
    }
}

/// Zero markers for an absent forecast; otherwise exactly one marker per
/// location, never skipped, never duplicated, order as given.
pub fn markers_for(forecast: Option<&Forecast>) -> Vec<MarkerSpec> {
    let Some(forecast) = forecast else {
        return Vec::new();
    };

    forecast
        .locations
        .iter()
        .map(|location| MarkerSpec {
            lat: location.lat,
            lon: location.lon,
            color: risk::color_for(location.risk),
            radius: risk::radius_for(location.pm25),
            name: location
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_LOCATION.to_string()),
            pm25: location.pm25,
            risk: location.risk,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Location;

    fn location(pm25: f64, risk: RiskLevel) -> Location {
        Location {
            name: None,
            lat: 26.9,
            lon: 75.8,
            pm25: Some(pm25),
            risk,
        }
    }

    #[test]
    fn test_no_forecast_means_no_markers() {
        assert!(markers_for(None).is_empty());
        assert!(markers_for(Some(&Forecast::default())).is_empty());
    }

    #[test]
    fn test_single_high_risk_location() {
        let forecast = Forecast {
            locations: vec![location(120.0, RiskLevel::High)],
            ..Forecast::default()
        };

        let markers = markers_for(Some(&forecast));
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].color, risk::color_for(RiskLevel::High));
        assert_eq!(markers[0].radius, 11.0);
    }

    #[test]
    fn test_one_marker_per_location_in_input_order() {
        let forecast = Forecast {
            locations: vec![
                location(10.0, RiskLevel::Low),
                location(80.0, RiskLevel::Medium),
                location(150.0, RiskLevel::High),
            ],
            ..Forecast::default()
        };

        let markers = markers_for(Some(&forecast));
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].risk, RiskLevel::Low);
        assert_eq!(markers[1].risk, RiskLevel::Medium);
        assert_eq!(markers[2].risk, RiskLevel::High);
    }

    #[test]
    fn test_unnamed_location_gets_generic_label() {
        let forecast = Forecast {
            locations: vec![location(50.0, RiskLevel::Low)],
            ..Forecast::default()
        };

        let markers = markers_for(Some(&forecast));
        assert_eq!(markers[0].name, "Location");
        assert!(markers[0].popup_html().contains("<strong>Location</strong>"));
    }

    #[test]
    fn test_popup_with_missing_pm25() {
        let forecast = Forecast {
            locations: vec![Location {
                name: Some("Jaipur".to_string()),
                lat: 26.9,
                lon: 75.8,
                pm25: None,
                risk: RiskLevel::Unknown,
            }],
            ..Forecast::default()
        };

        let markers = markers_for(Some(&forecast));
        assert_eq!(markers[0].radius, 5.0);
        let popup = markers[0].popup_html();
        assert!(popup.contains("Jaipur"));
        assert!(popup.contains("PM2.5: n/a"));
        assert!(popup.contains("Risk: Unknown"));
    }
}
