use yew::prelude::*;
use crate::components::hero::Hero;
use crate::components::services::ServicesGrid;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home-page">
            <Hero />
            <div class="divider"></div>
            <ServicesGrid />
        </main>
    }
}
