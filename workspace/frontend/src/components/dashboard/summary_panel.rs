use crate::components::common::loading::Loading;
use crate::risk;
use common::{Next24h, Summary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: Option<Summary>,
    pub next24h: Option<Next24h>,
    pub loading: bool,
    #[prop_or_default]
    pub updated_at: Option<String>,
}

fn format_reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.1} {unit}"),
        None => "n/a".to_string(),
    }
}

/// Quick-summary card: current PM2.5, recent rain, risk badge, and the
/// short-horizon admissions outlook when the forecast carries one.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Quick Summary"}</h2>
                { if props.loading {
                    html! { <Loading text="Loading..." /> }
                } else {
                    html! {}
                }}
                { if let Some(summary) = &props.summary {
                    let badge_style = format!(
                        "background-color: {}; color: white;",
                        risk::color_for(summary.risk_level)
                    );
                    html! {
                        <div class="mt-2 text-sm space-y-1">
                            { if let Some(city) = &summary.city {
                                html! { <p><strong>{"City: "}</strong>{city}</p> }
                            } else {
                                html! {}
                            }}
                            <p><strong>{"PM2.5 (24h): "}</strong>{format_reading(summary.current_pm25, "µg/m³")}</p>
                            <p><strong>{"Rain (24h): "}</strong>{format_reading(summary.recent_rain_mm, "mm")}</p>
                            <p>
                                <strong>{"Forecast risk: "}</strong>
                                <span class="badge" style={badge_style}>{summary.risk_level.to_string()}</span>
                            </p>
                            { if let Some(next24h) = &props.next24h {
                                html! {
                                    <p>
                                        <strong>{"Expected admissions (24h): "}</strong>
                                        {next24h.estimated_admissions.map_or_else(|| "n/a".to_string(), |n| n.to_string())}
                                        { if let Some(confidence) = &next24h.confidence {
                                            html! { <span class="text-gray-500">{format!(" ({confidence} confidence)")}</span> }
                                        } else {
                                            html! {}
                                        }}
                                    </p>
                                }
                            } else {
                                html! {}
                            }}
                            { if let Some(at) = &props.updated_at {
                                html! { <p class="text-xs text-gray-400">{format!("Updated {at}")}</p> }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
