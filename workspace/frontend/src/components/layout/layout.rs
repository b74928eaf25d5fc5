use super::navbar::Navbar;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 max-w-6xl w-full mx-auto p-6">
                { for props.children.iter() }
            </main>
            <footer class="max-w-6xl w-full mx-auto p-6 text-sm text-gray-500">
                {"Demo. Configure the API base location on the Settings page."}
            </footer>
        </div>
    }
}
