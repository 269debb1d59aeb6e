use yew::prelude::*;
use yew_router::prelude::*;
use crate::catalog::SERVICES;
use crate::Route;

/// Resumen de servicios para la página de inicio; el detalle completo
/// vive en la página de Servicios.
#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    html! {
        <section id="servicios" class="section services-section">
            <div class="container">
                <p class="kicker">{"Servicios"}</p>
                <h2>{"Soluciones arquitectónicas claras y bien ejecutadas"}</h2>
                <p class="muted services-sub">
                    {"Cada servicio está diseñado para integrarse a un proceso ordenado, \
                      con entregables definidos y comunicación constante."}
                </p>

                <div class="grid-2 services-grid">
                    {
                        SERVICES.iter().map(|s| html! {
                            <article class="card card-pad service-card" key={s.id}>
                                <h3>{ s.title }</h3>
                                <p class="muted service-desc">{ s.subtitle }</p>
                                <Link<Route> to={Route::Servicios} classes="btn service-link">
                                    {"Ver detalle ↗"}
                                </Link<Route>>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .services-section h2 {
                    max-width: 22ch;
                    margin-top: 0.5rem;
                }

                .services-sub {
                    margin-top: 0.75rem;
                    max-width: 60ch;
                }

                .services-grid {
                    margin-top: 2rem;
                }

                .service-card h3 {
                    letter-spacing: -0.01em;
                }

                .service-desc {
                    margin: 0.5rem 0 0;
                }

                .service-link {
                    margin-top: 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}
