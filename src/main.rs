use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod intake;
mod gallery;
mod catalog;
mod pages {
    pub mod home;
    pub mod proyectos;
    pub mod servicios;
    pub mod contacto;
}
mod components {
    pub mod hero;
    pub mod services;
    pub mod cta;
    pub mod faq;
    pub mod service_area;
    pub mod footer;
}

use pages::{
    home::Home,
    proyectos::Proyectos,
    servicios::Servicios,
    contacto::Contacto,
};
use components::{
    cta::Cta,
    faq::Faq,
    service_area::ServiceArea,
    footer::Footer,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/proyectos")]
    Proyectos,
    #[at("/servicios")]
    Servicios,
    #[at("/contacto")]
    Contacto,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Inicio page");
            html! { <Home /> }
        }
        Route::Proyectos => {
            info!("Rendering Proyectos page");
            html! { <Proyectos /> }
        }
        Route::Servicios => {
            info!("Rendering Servicios page");
            html! { <Servicios /> }
        }
        Route::Contacto => {
            info!("Rendering Contacto page");
            html! { <Contacto /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 8);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    <span class="brand-mark">{"AES"}</span>
                    <span class="brand-text">
                        <span class="brand-name">{"AES Arquitectos"}</span>
                        <span class="brand-sub">{"Arquitectura & Diseño"}</span>
                    </span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Inicio"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Proyectos} classes="nav-link">
                            {"Proyectos"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Servicios} classes="nav-link">
                            {"Servicios"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contacto} classes="nav-link">
                            {"Contacto"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contacto} classes="nav-cta">
                            {"Cotizar ↗"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.78);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.08);
                    transition: border-color 200ms ease;
                }

                .top-nav.scrolled {
                    border-bottom: 1px solid rgba(0, 0, 0, 0.14);
                }

                .nav-content {
                    max-width: 1120px;
                    margin: 0 auto;
                    height: 72px;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 12px;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    text-decoration: none;
                    color: var(--fg);
                }

                .brand-mark {
                    width: 36px;
                    height: 36px;
                    border-radius: 12px;
                    border: 1px solid rgba(0, 0, 0, 0.12);
                    display: grid;
                    place-items: center;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    background: rgba(255, 255, 255, 0.85);
                }

                .brand-text {
                    display: flex;
                    flex-direction: column;
                    line-height: 1.05;
                }

                .brand-name {
                    font-weight: 700;
                    letter-spacing: -0.02em;
                }

                .brand-sub {
                    font-size: 0.8rem;
                    color: var(--muted);
                    margin-top: 2px;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 6px;
                }

                .nav-link {
                    padding: 10px 12px;
                    border-radius: 999px;
                    color: var(--muted);
                    text-decoration: none;
                    transition: all 180ms ease;
                }

                .nav-link:hover {
                    color: var(--fg);
                    background: rgba(0, 0, 0, 0.04);
                }

                .nav-cta {
                    padding: 10px 16px;
                    border-radius: 999px;
                    background: var(--fg);
                    color: #fff;
                    text-decoration: none;
                    white-space: nowrap;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 10px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--fg);
                }

                @media (max-width: 899px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: fixed;
                        inset: 72px 0 0 0;
                        background: rgba(255, 255, 255, 0.96);
                        backdrop-filter: blur(12px);
                        padding: 16px;
                        gap: 10px;
                    }

                    .nav-right.mobile-menu-open .nav-link,
                    .nav-right.mobile-menu-open .nav-cta {
                        display: block;
                        padding: 16px 14px;
                        border-radius: 16px;
                        border: 1px solid rgba(0, 0, 0, 0.10);
                        text-align: left;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Cta />
            <Faq />
            <ServiceArea />
            <Footer />
            <style>
                {r#"
                :root {
                    --bg: #ffffff;
                    --surface: #f6f6f4;
                    --fg: #161616;
                    --muted: #5f5f5c;
                    --line: rgba(0, 0, 0, 0.10);
                    --line-strong: rgba(0, 0, 0, 0.18);
                }

                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--fg);
                    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                h1 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin: 0;
                }

                h2 {
                    font-size: clamp(1.5rem, 3vw, 2.1rem);
                    letter-spacing: -0.02em;
                    margin: 0;
                }

                h3 {
                    margin: 0;
                }

                .section {
                    padding: 4rem 0;
                }

                .container {
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .kicker {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.8rem;
                    color: var(--muted);
                    margin: 0;
                }

                .muted {
                    color: var(--muted);
                }

                .divider {
                    height: 1px;
                    background: var(--line);
                }

                .card {
                    background: var(--bg);
                    border: 1px solid var(--line);
                    border-radius: 16px;
                }

                .card-pad {
                    padding: 1.5rem;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    padding: 12px 18px;
                    border-radius: 999px;
                    border: 1px solid var(--line);
                    background: transparent;
                    color: var(--fg);
                    font-size: 0.95rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 180ms ease;
                }

                .btn:hover {
                    border-color: var(--line-strong);
                    background: rgba(0, 0, 0, 0.04);
                }

                .btn-primary {
                    background: var(--fg);
                    border-color: var(--fg);
                    color: #fff;
                }

                .btn-primary:hover {
                    background: #000;
                }

                .grid-2 {
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 900px) {
                    .grid-2 {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    config::assert_number_configured();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
