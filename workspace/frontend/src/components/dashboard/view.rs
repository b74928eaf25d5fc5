use super::advisory::AdvisoryPanel;
use super::summary_panel::SummaryPanel;
use crate::components::map::MapView;
use crate::components::timeline::TimelineChart;
use crate::hooks::use_snapshot;
use crate::settings;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

// Cities the EnvHealth API knows coordinates for.
const CITIES: [&str; 6] = [
    "Delhi",
    "Mumbai",
    "Jaipur",
    "Chennai",
    "Kolkata",
    "Bengaluru",
];

/// Orchestrates the fetch lifecycle and composes summary panel, map, and
/// timeline. All children receive the snapshot as immutable props; a new
/// cycle replaces it wholesale.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (state, refetch) = use_snapshot();
    let selected_city = settings::get_settings().city;

    let on_city_change = {
        let refetch = refetch.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let city = select.value();
                log::debug!("Monitored city changed to: {}", city);
                settings::update_settings(|s| s.city = city);
                if let Err(err) = settings::get_settings().save_to_storage() {
                    log::warn!("Failed to persist city selection: {:?}", err);
                }
                refetch.emit(());
            }
        })
    };

    let on_refresh = {
        let refetch = refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let updated_at = state
        .updated_at
        .map(|at| at.format("%H:%M:%S").to_string());

    html! {
        <>
            <div class="flex justify-between items-center mb-6">
                <select
                    class="select select-sm select-bordered"
                    onchange={on_city_change}
                >
                    { for CITIES.iter().map(|city| html! {
                        <option value={*city} selected={*city == selected_city}>{*city}</option>
                    }) }
                </select>
                <button
                    class="btn btn-primary btn-sm"
                    disabled={state.loading}
                    onclick={on_refresh}
                >
                    <i class="fas fa-rotate"></i>
                    {" Refresh"}
                </button>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Monitored Locations"}</h2>
                        <MapView forecast={state.snapshot.forecast.clone()} />
                    </div>
                </section>
                <aside class="space-y-4">
                    <SummaryPanel
                        summary={state.snapshot.summary.clone()}
                        next24h={state.snapshot.forecast.as_ref().and_then(|f| f.next24h.clone())}
                        loading={state.loading}
                        updated_at={updated_at}
                    />
                    <AdvisoryPanel />
                </aside>
                <section class="lg:col-span-3 card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast Timeline"}</h2>
                        <TimelineChart forecast={state.snapshot.forecast.clone()} />
                    </div>
                </section>
            </div>
        </>
    }
}
