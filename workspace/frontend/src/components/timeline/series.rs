//! Pure mapping from a forecast timeline to Plotly traces.
//!
//! Draw order matters: the p10 trace goes first as an invisible anchor,
//! then p90 fills down to it (`tonexty`), producing a shaded band that is
//! visually distinct from the two point-series. Absent values serialize to
//! JSON null so missing measurements render as gaps, never zeros.

use common::Forecast;
use serde_json::{json, Value};

const BAND_FILL: &str = "rgba(252, 211, 77, 0.3)";
const MEDIAN_COLOR: &str = "#1f77b4";
const OBSERVED_COLOR: &str = "#ff7f0e";

/// Builds the four renderable series: uncertainty band (two traces),
/// predicted median, observed. Empty when there is nothing to draw.
pub fn timeline_traces(forecast: Option<&Forecast>) -> Vec<Value> {
    let Some(timeline) = forecast.map(|f| &f.timeline).filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    // One x-axis category per timeline point, in input order.
    let dates: Vec<String> = timeline.iter().map(|p| p.date.to_string()).collect();
    let p10: Vec<Option<f64>> = timeline.iter().map(|p| p.p10).collect();
    let p90: Vec<Option<f64>> = timeline.iter().map(|p| p.p90).collect();
    let pred_median: Vec<Option<f64>> = timeline.iter().map(|p| p.pred_median).collect();
    let obs: Vec<Option<f64>> = timeline.iter().map(|p| p.obs).collect();

    vec![
        json!({
            "x": dates,
            "y": p10,
            "type": "scatter",
            "mode": "lines",
            "line": {"width": 0},
            "hoverinfo": "skip",
            "showlegend": false,
            "name": "p10"
        }),
        json!({
            "x": dates,
            "y": p90,
            "type": "scatter",
            "mode": "lines",
            "line": {"width": 0},
            "fill": "tonexty",
            "fillcolor": BAND_FILL,
            "name": "10-90% band"
        }),
        json!({
            "x": dates,
            "y": pred_median,
            "type": "scatter",
            "mode": "lines+markers",
            "line": {"color": MEDIAN_COLOR},
            "marker": {"size": 4},
            "name": "Predicted median"
        }),
        json!({
            "x": dates,
            "y": obs,
            "type": "scatter",
            "mode": "lines+markers",
            "line": {"color": OBSERVED_COLOR},
            "marker": {"size": 4},
            "name": "Observed"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TimelinePoint;
    use serde_json::json;

    fn forecast_with_timeline(timeline: Vec<TimelinePoint>) -> Forecast {
        Forecast {
            timeline,
            ..Forecast::default()
        }
    }

    fn point(date: &str) -> TimelinePoint {
        TimelinePoint {
            date: date.parse().expect("valid ISO date"),
            ..TimelinePoint::default()
        }
    }

    #[test]
    fn test_no_forecast_means_no_traces() {
        assert!(timeline_traces(None).is_empty());
        assert!(timeline_traces(Some(&Forecast::default())).is_empty());
    }

    #[test]
    fn test_four_traces_with_band_between_point_series_and_axis() {
        let forecast = forecast_with_timeline(vec![TimelinePoint {
            obs: Some(5.0),
            pred_median: Some(7.0),
            p10: Some(4.0),
            p90: Some(10.0),
            ..point("2024-01-01")
        }]);

        let traces = timeline_traces(Some(&forecast));
        assert_eq!(traces.len(), 4);
        // The band is the fill between the first two traces, not a third
        // independent point-series.
        assert_eq!(traces[0]["name"], json!("p10"));
        assert_eq!(traces[1]["fill"], json!("tonexty"));
        assert_eq!(traces[2]["name"], json!("Predicted median"));
        assert_eq!(traces[3]["name"], json!("Observed"));
    }

    #[test]
    fn test_dates_in_input_order_and_gaps_stay_null() {
        let forecast = forecast_with_timeline(vec![
            TimelinePoint {
                obs: Some(5.0),
                ..point("2024-01-02")
            },
            TimelinePoint {
                pred_median: Some(7.0),
                p10: Some(4.0),
                p90: Some(10.0),
                ..point("2024-01-01")
            },
        ]);

        let traces = timeline_traces(Some(&forecast));
        // Input order preserved even when it is not sorted.
        assert_eq!(traces[0]["x"], json!(["2024-01-02", "2024-01-01"]));
        // Missing fields pass through as null, not zero.
        assert_eq!(traces[3]["y"], json!([5.0, null]));
        assert_eq!(traces[2]["y"], json!([null, 7.0]));
        assert_eq!(traces[0]["y"], json!([null, 4.0]));
        assert_eq!(traces[1]["y"], json!([null, 10.0]));
    }
}
