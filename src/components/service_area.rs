use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(ServiceArea)]
pub fn service_area() -> Html {
    html! {
        <section id="cobertura" class="section coverage-section">
            <div class="container">
                <p class="kicker">{"Cobertura"}</p>
                <h2>{"Estudio ubicado en Chiapas, atención 100% en línea"}</h2>
                <p class="muted coverage-sub">
                    {"Nuestro punto de referencia se encuentra en Tuxtla Gutiérrez, Chiapas. \
                      Trabajamos de forma remota con clientes en toda la República Mexicana y \
                      Estados Unidos."}
                </p>

                <div class="coverage-grid">
                    <div class="card coverage-map">
                        <div class="coverage-map-header">
                            <p class="coverage-place">{"Tuxtla Gutiérrez, Chiapas"}</p>
                            <p class="muted coverage-place-sub">{"Punto de referencia del estudio"}</p>
                        </div>
                        <div class="coverage-placeholder">
                            <span class="kicker">{"MX · USA"}</span>
                        </div>
                    </div>

                    <aside class="card card-pad">
                        <p class="kicker">{"Cómo trabajamos a distancia"}</p>
                        <ul class="coverage-list muted">
                            <li>{"Brief y seguimiento por WhatsApp o llamada"}</li>
                            <li>{"Entregas digitales: PDF, renders y modelado 3D"}</li>
                            <li>{"Revisiones definidas por etapa"}</li>
                            <li>{"Cotización con alcances y tiempos por escrito"}</li>
                        </ul>

                        <div class="divider coverage-divider"></div>

                        <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                            {"Iniciar mi proyecto ↗"}
                        </Link<Route>>
                    </aside>
                </div>
            </div>

            <style>
                {r#"
                .coverage-section h2 {
                    max-width: 30ch;
                    margin-top: 0.5rem;
                }

                .coverage-sub {
                    margin-top: 0.75rem;
                    max-width: 70ch;
                }

                .coverage-grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .coverage-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: start;
                    }
                }

                .coverage-map {
                    overflow: hidden;
                }

                .coverage-map-header {
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid var(--line);
                }

                .coverage-place {
                    margin: 0;
                    font-weight: 500;
                }

                .coverage-place-sub {
                    margin: 4px 0 0;
                    font-size: 0.95rem;
                }

                .coverage-placeholder {
                    height: 280px;
                    display: grid;
                    place-items: center;
                    background: var(--surface);
                }

                .coverage-list {
                    list-style: none;
                    margin: 0.75rem 0 0;
                    padding: 0;
                    display: grid;
                    gap: 8px;
                }

                .coverage-divider {
                    margin: 1.25rem 0;
                }
                "#}
            </style>
        </section>
    }
}
