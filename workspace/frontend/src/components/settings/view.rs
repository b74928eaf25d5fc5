use crate::settings;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Connection settings form. The API base location is the one configuration
/// option the dashboard needs; empty means same-origin requests.
#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let api_base_ref = use_node_ref();
    let current = settings::get_settings();

    let on_save = {
        let api_base_ref = api_base_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(input) = api_base_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let api_base = input.value().trim().trim_end_matches('/').to_string();
            log::info!("Saving API base location: '{}'", api_base);
            settings::update_settings(|s| s.api_base = api_base);

            match settings::get_settings().save_to_storage() {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }
                Err(err) => log::error!("Failed to persist settings: {:?}", err),
            }
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Connection Settings"}</h2>
                    <div class="form-control w-full mt-4">
                        <label class="label" for="api-base-input">
                            <span class="label-text">{"API base location"}</span>
                        </label>
                        <input
                            type="text"
                            id="api-base-input"
                            ref={api_base_ref}
                            value={current.api_base}
                            placeholder="Empty = same origin"
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" onclick={on_save}>{"Save & Reload"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
