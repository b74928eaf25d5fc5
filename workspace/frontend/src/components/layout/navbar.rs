use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 flex items-center gap-3">
                <span class="text-xl font-semibold text-sky-700">{"EnvHealth Dashboard"}</span>
                <h1 class="text-sm text-gray-500" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2 px-4">
                <Link<Route> to={Route::Home} classes="btn btn-ghost btn-sm">
                    <i class="fas fa-home w-5"></i> {"Dashboard"}
                </Link<Route>>
                <Link<Route> to={Route::Settings} classes="btn btn-ghost btn-sm">
                    <i class="fas fa-cog w-5"></i> {"Settings"}
                </Link<Route>>
                <Link<Route> to={Route::About} classes="btn btn-ghost btn-sm">
                    <i class="fas fa-circle-info w-5"></i> {"About"}
                </Link<Route>>
            </div>
        </div>
    }
}
