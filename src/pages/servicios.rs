use yew::prelude::*;
use yew_router::prelude::*;
use crate::catalog::{ServiceDetail, SERVICES};
use crate::config;
use crate::Route;

const QUOTE_CHECKLIST: &[&str] = &[
    "Ubicación (ciudad/estado) y tipo de proyecto",
    "Medidas o m² + fotos del sitio (si aplica)",
    "Referencias (Pinterest/links) y estilo deseado",
    "Presupuesto estimado y fecha objetivo",
];

#[derive(Properties, PartialEq)]
struct BulletsProps {
    items: &'static [&'static str],
}

#[function_component(Bullets)]
fn bullets(props: &BulletsProps) -> Html {
    html! {
        <ul class="bullets muted">
            {
                props.items.iter().map(|item| html! {
                    <li key={*item}>
                        <span aria-hidden="true">{"•"}</span>
                        <span>{*item}</span>
                    </li>
                }).collect::<Html>()
            }
        </ul>
    }
}

fn service_article(s: &ServiceDetail) -> Html {
    html! {
        <article id={s.id} class="card card-pad service-article" key={s.id}>
            <div class="service-grid">
                <div>
                    <h3>{ s.title }</h3>
                    <p class="muted subtitle">{ s.subtitle }</p>

                    <div class="divider block-divider"></div>

                    <p class="block-title">{"¿Para quién es?"}</p>
                    <Bullets items={s.for_who} />

                    <div class="divider block-divider"></div>

                    <p class="block-title">{"Incluye"}</p>
                    <Bullets items={s.includes} />

                    {
                        if !s.notes.is_empty() {
                            html! {
                                <>
                                    <div class="divider block-divider"></div>
                                    <p class="muted note">{ s.notes.join(" ") }</p>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <aside class="service-aside">
                    <p class="kicker">{"Entregables"}</p>
                    <Bullets items={s.deliverables} />

                    <div class="divider block-divider"></div>

                    <p class="block-title small">{"Tiempo estimado"}</p>
                    <Bullets items={s.timeline} />

                    <div class="divider block-divider"></div>

                    <p class="block-title small">{"Qué necesitamos"}</p>
                    <Bullets items={s.inputs} />

                    {
                        if !s.add_ons.is_empty() {
                            html! {
                                <>
                                    <div class="divider block-divider"></div>
                                    <p class="block-title small">{"Opcionales"}</p>
                                    <Bullets items={s.add_ons} />
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <div class="divider block-divider"></div>

                    <div class="aside-actions">
                        <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                            {"Cotizar este servicio"}
                        </Link<Route>>
                        <a href="#faq" class="btn">{"Ver FAQ"}</a>
                    </div>
                </aside>
            </div>
        </article>
    }
}

#[function_component(Servicios)]
pub fn servicios() -> Html {
    html! {
        <main class="servicios-page">
            <section class="section">
                <div class="container">
                    <p class="kicker">{"Servicios"}</p>

                    <div class="header-grid">
                        <div>
                            <h1>{"Alcances claros, entregables definidos y un proceso ordenado."}</h1>
                            <p class="muted header-sub">
                                {"Esta página detalla cada servicio para que sepas exactamente qué incluye, \
                                  qué necesitas compartir y qué entregables recibes. Trabajamos 100% en línea \
                                  desde Chiapas para México y EE. UU."}
                            </p>

                            <div class="header-actions">
                                <a href="#lista" class="btn btn-primary">{"Ver servicios detallados"}</a>
                                <a href="#faq" class="btn">{"Preguntas frecuentes"}</a>
                            </div>

                            <div class="index-block">
                                <p class="kicker">{"Índice"}</p>
                                <div class="grid-2 index-grid">
                                    {
                                        SERVICES.iter().map(|s| html! {
                                            <a key={s.id} href={format!("#{}", s.id)} class="card card-pad index-card">
                                                <p class="index-title">{ s.title }</p>
                                                <p class="muted index-sub">{ s.subtitle }</p>
                                            </a>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>

                        <aside class="card card-pad">
                            <p class="kicker">{"Para cotizar"}</p>
                            <h3 class="aside-title">{"Lo que necesitamos de ti"}</h3>
                            <p class="muted">
                                {"Con esta información te damos una propuesta precisa y rápida."}
                            </p>

                            <div class="divider block-divider"></div>

                            <Bullets items={QUOTE_CHECKLIST} />

                            <div class="divider block-divider"></div>

                            <a
                                href={config::whatsapp_direct_link()}
                                target="_blank"
                                rel="noreferrer"
                                class="btn btn-primary quote-link"
                            >
                                {"Cotizar por WhatsApp"}
                            </a>

                            <p class="muted note">
                                {"Nota: Ajustamos alcances según complejidad, m² y número de vistas/entregables."}
                            </p>
                        </aside>
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            <section id="lista" class="section">
                <div class="container">
                    <p class="kicker">{"Detalle"}</p>
                    <h2>{"Servicios, alcances y entregables"}</h2>
                    <p class="muted header-sub">
                        {"Usa esta guía como referencia. En la cotización definimos el paquete exacto \
                          (vistas, nivel de detalle, revisiones y tiempos)."}
                    </p>

                    <div class="services-list">
                        { SERVICES.iter().map(service_article).collect::<Html>() }
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .servicios-page h1 {
                    max-width: 26ch;
                    margin-top: 0.75rem;
                }

                .servicios-page .header-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .servicios-page .header-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: start;
                    }
                }

                .header-sub {
                    max-width: 68ch;
                    margin-top: 1rem;
                }

                .header-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                }

                .index-block {
                    margin-top: 2rem;
                }

                .index-grid {
                    margin-top: 0.75rem;
                }

                .index-card {
                    text-decoration: none;
                    color: inherit;
                    transition: border-color 180ms ease;
                }

                .index-card:hover {
                    border-color: var(--line-strong);
                }

                .index-title {
                    margin: 0 0 4px;
                    font-weight: 500;
                }

                .index-sub {
                    margin: 0;
                    font-size: 0.95rem;
                }

                .aside-title {
                    margin-top: 0.5rem;
                }

                .bullets {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: grid;
                    gap: 8px;
                }

                .bullets li {
                    display: flex;
                    gap: 8px;
                }

                .block-divider {
                    margin: 1.25rem 0;
                }

                .block-title {
                    margin: 0 0 8px;
                    font-weight: 500;
                }

                .block-title.small {
                    font-size: 0.95rem;
                }

                .note {
                    margin: 1rem 0 0;
                    font-size: 0.95rem;
                }

                .subtitle {
                    margin: 0.5rem 0 0;
                }

                .quote-link {
                    width: 100%;
                    justify-content: center;
                }

                .services-list {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }

                .service-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .service-grid {
                        grid-template-columns: 1.15fr 0.85fr;
                        align-items: start;
                    }
                }

                .service-aside {
                    border: 1px solid var(--line);
                    border-radius: 8px;
                    padding: 1.25rem;
                }

                .aside-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                }
                "#}
            </style>
        </main>
    }
}
