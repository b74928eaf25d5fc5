use yew::prelude::*;

/// Static advisory actions shown next to the summary. Pure presentation;
/// no alerting or notification dispatch happens here.
#[function_component(AdvisoryPanel)]
pub fn advisory_panel() -> Html {
    html! {
        <div class="card bg-base-100 shadow text-sm">
            <div class="card-body">
                <h3 class="card-title">{"Actions"}</h3>
                <ul class="mt-2 list-disc ml-6">
                    <li>{"Pre-alert hospitals if admissions expected to rise >10%"}</li>
                    <li>{"Issue public advisory when PM2.5 > 100 µg/m³"}</li>
                    <li>{"Mobilize municipal pumps for flooded wards"}</li>
                </ul>
            </div>
        </div>
    }
}
