use super::series::timeline_traces;
use common::Forecast;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: Option<Forecast>,
}

/// Observed vs. predicted PM2.5 with the 10-90% uncertainty band. Redrawn
/// whenever the forecast prop changes; an absent forecast draws an empty
/// chart rather than failing.
#[function_component(TimelineChart)]
pub fn timeline_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(
        (chart_ref.clone(), props.forecast.clone()),
        move |(chart_ref, forecast)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let traces = timeline_traces(forecast.as_ref());
                log::debug!("Drawing timeline chart with {} traces", traces.len());

                let layout = serde_json::json!({
                    "margin": {"t": 10, "r": 30, "l": 50, "b": 30},
                    "paper_bgcolor": "rgba(0,0,0,0)",
                    "plot_bgcolor": "rgba(0,0,0,0)",
                    "xaxis": {"showgrid": false},
                    "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "PM2.5 (µg/m³)"}},
                    "showlegend": true,
                    "legend": {"orientation": "h", "y": -0.2}
                });

                let config = serde_json::json!({"responsive": true, "displayModeBar": false});

                let div_id = element.id();
                if !div_id.is_empty() {
                    newPlot(
                        &div_id,
                        serde_wasm_bindgen::to_value(&traces).unwrap(),
                        serde_wasm_bindgen::to_value(&layout).unwrap(),
                        serde_wasm_bindgen::to_value(&config).unwrap(),
                    );
                }
            }
            || ()
        },
    );

    html! {
        <div ref={chart_ref} id="chart-timeline" class="chart-container" style="height: 300px;"></div>
    }
}
