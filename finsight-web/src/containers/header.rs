use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-gray-900">
                        <Link<MainRoute> to={MainRoute::Home}>
                            {"Financial Assistant"}
                        </Link<MainRoute>>
                    </h1>
                </div>
            </div>
        </header>
    }
}
