use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod risk;
pub mod settings;
pub mod shape;
pub mod snapshot;

use components::dashboard::Dashboard;
use components::layout::Layout;
use components::settings::SettingsView;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings")]
    Settings,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Settings => {
            html! { <Layout title="Settings"><SettingsView /></Layout> }
        }
        Route::About => {
            html! {
                <Layout title="About">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body text-sm">
                            <p>{"EnvHealth renders air-quality readings, rainfall, and \
                                disease-risk forecasts for situational awareness."}</p>
                            <p>{"It is a presentation layer over the EnvHealth API and \
                                owns no data collection, modeling, or alerting."}</p>
                        </div>
                    </div>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Settings first: the logger level comes from them.
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== EnvHealth Dashboard Starting ===");
    log::debug!(
        "API base: '{}', city: {}, debug mode: {}",
        settings.api_base,
        settings.city,
        settings.debug_mode
    );

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
