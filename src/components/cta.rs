use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::Route;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="section cta-section">
            <div class="container">
                <div class="card card-pad cta-card">
                    <div class="cta-copy">
                        <p class="kicker">{"Cotización"}</p>
                        <h2>{"¿Listo para comenzar tu proyecto?"}</h2>
                        <p class="muted cta-desc">
                            {"Cuéntanos tu idea y recibe una propuesta clara, con tiempos y entregables definidos."}
                        </p>
                    </div>

                    <div class="cta-actions">
                        <a
                            href={config::whatsapp_direct_link()}
                            target="_blank"
                            rel="noreferrer"
                            class="btn btn-primary"
                        >
                            {"Cotizar por WhatsApp ↗"}
                        </a>
                        <Link<Route> to={Route::Servicios} classes="btn">
                            {"Ver servicios"}
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .cta-card {
                    display: grid;
                    gap: 1.5rem;
                    position: relative;
                    overflow: hidden;
                }

                @media (min-width: 800px) {
                    .cta-card {
                        grid-template-columns: 1.2fr 0.8fr;
                        align-items: center;
                    }
                }

                .cta-copy h2 {
                    max-width: 22ch;
                    margin-top: 0.5rem;
                }

                .cta-desc {
                    margin-top: 0.75rem;
                    max-width: 52ch;
                }

                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                }

                @media (min-width: 800px) {
                    .cta-actions {
                        justify-content: flex-end;
                    }
                }
                "#}
            </style>
        </section>
    }
}
