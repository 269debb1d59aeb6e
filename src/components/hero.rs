use yew::prelude::*;
use yew_router::prelude::*;
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
struct MiniStatProps {
    label: String,
    desc: String,
}

#[function_component(MiniStat)]
fn mini_stat(props: &MiniStatProps) -> Html {
    html! {
        <div class="card card-pad mini-stat">
            <p class="stat-label">{&props.label}</p>
            <p class="muted stat-desc">{&props.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PreviewCardProps {
    title: String,
    desc: String,
}

#[function_component(PreviewCard)]
fn preview_card(props: &PreviewCardProps) -> Html {
    html! {
        <div class="preview-card">
            <p class="preview-title">{&props.title}</p>
            <p class="muted preview-desc">{&props.desc}</p>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="section hero-section">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <p class="kicker">
                        {"AES Arquitectos"}
                        <span class="kicker-rule"></span>
                        <span class="muted">{"Chiapas, México · Trabajamos en toda la República y EE. UU."}</span>
                    </p>

                    <h1>{"Arquitectura y visualización profesional, 100% en línea."}</h1>

                    <p class="muted hero-sub">
                        {"Diseñamos fachadas, áreas sociales y proyectos completos con un proceso claro, \
                          entregables listos para construir y comunicación constante."}
                    </p>

                    <div class="hero-actions">
                        <a
                            class="btn btn-primary"
                            href={config::whatsapp_direct_link()}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Cotizar por WhatsApp ↗"}
                        </a>
                        <Link<Route> to={Route::Servicios} classes="btn">
                            {"Ver servicios ↗"}
                        </Link<Route>>
                    </div>

                    <div class="hero-stats">
                        <MiniStat label="+400 clientes" desc="Experiencia comprobada" />
                        <MiniStat label="+3 años" desc="Operación 100% en línea" />
                        <MiniStat label="MX / USA" desc="Atención a distancia" />
                    </div>

                    <p class="muted hero-note">
                        {"Entregables: planos en PDF, modelado 3D y renders finales (según el paquete)."}
                    </p>
                </div>

                <div class="card hero-media">
                    <div class="hero-media-inner">
                        <div class="hero-media-top">
                            <span class="kicker">{"Renders · Planos · 3D"}</span>
                            <span class="hero-badge">{"Proceso claro"}</span>
                        </div>

                        <div class="hero-previews">
                            <PreviewCard
                                title="Diseño de Fachada"
                                desc="Propuesta estética, materiales y visualización."
                            />
                            <PreviewCard
                                title="Diseño de Área Social"
                                desc="Distribución, 3D, planos y renders finales."
                            />
                            <PreviewCard
                                title="Proyecto Arquitectónico Completo"
                                desc="Diseño, modelado 3D, planos y renders."
                            />
                        </div>

                        <div class="hero-media-bottom">
                            <div class="divider"></div>
                            <p class="muted">
                                {"Trabajamos contigo paso a paso para que tu proyecto quede como lo imaginas."}
                            </p>
                        </div>
                    </div>
                    <div class="hero-floating-badge">{"Estudio de arquitectura · Online"}</div>
                </div>
            </div>

            <style>
                {r#"
                .hero-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .hero-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: stretch;
                    }
                }

                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .hero-copy h1 {
                    margin-top: 0.75rem;
                    max-width: 22ch;
                }

                .hero-copy .kicker {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    flex-wrap: wrap;
                }

                .kicker-rule {
                    display: inline-block;
                    height: 1px;
                    width: 40px;
                    background: var(--line);
                }

                .hero-sub {
                    margin-top: 1rem;
                    max-width: 62ch;
                }

                .hero-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 12px;
                }

                .hero-stats {
                    margin-top: 1.75rem;
                    display: grid;
                    gap: 12px;
                }

                @media (min-width: 640px) {
                    .hero-stats {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .stat-label {
                    margin: 0;
                    font-weight: 500;
                }

                .stat-desc {
                    margin: 2px 0 0;
                    font-size: 0.95rem;
                }

                .hero-note {
                    margin-top: 1.25rem;
                    font-size: 0.95rem;
                }

                .hero-media {
                    position: relative;
                    overflow: hidden;
                    background: var(--surface);
                    min-height: 340px;
                }

                .hero-media-inner {
                    height: 100%;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }

                .hero-media-top {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .hero-badge {
                    border: 1px solid var(--line);
                    border-radius: 4px;
                    padding: 4px 12px;
                    font-size: 0.85rem;
                    color: var(--muted);
                }

                .hero-previews {
                    margin-top: 1.25rem;
                    display: grid;
                    gap: 12px;
                }

                .preview-card {
                    border: 1px solid var(--line);
                    border-radius: 8px;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.70);
                    backdrop-filter: blur(6px);
                }

                .preview-title {
                    margin: 0 0 4px;
                    font-weight: 500;
                }

                .preview-desc {
                    margin: 0;
                    font-size: 0.95rem;
                }

                .hero-media-bottom {
                    margin-top: 1.5rem;
                }

                .hero-media-bottom .muted {
                    margin: 1rem 0 0;
                    font-size: 0.95rem;
                }

                .hero-floating-badge {
                    pointer-events: none;
                    position: absolute;
                    left: 16px;
                    top: 16px;
                    border: 1px solid var(--line);
                    border-radius: 999px;
                    background: var(--bg);
                    padding: 4px 12px;
                    font-size: 0.85rem;
                    color: var(--muted);
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
                }
                "#}
            </style>
        </section>
    }
}
