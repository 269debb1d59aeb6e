use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};
use crate::config;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    is_open: bool,
    on_toggle: Callback<MouseEvent>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <article class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                onclick={props.on_toggle.clone()}
            >
                <span class="question-main">
                    <span class="question-text">{&props.question}</span>
                    <span class="muted question-hint">
                        { if props.is_open { "Ocultar respuesta" } else { "Ver respuesta" } }
                    </span>
                </span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            {
                if props.is_open {
                    html! {
                        <div class="faq-answer">
                            <div class="divider answer-divider"></div>
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </article>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // una sola respuesta abierta a la vez; la primera inicia abierta
    let open_index = use_state(|| Some(0usize));

    let toggle = |idx: usize| {
        let open_index = open_index.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *open_index == Some(idx) {
                open_index.set(None);
            } else {
                open_index.set(Some(idx));
            }
        })
    };

    let questions = [
        ("¿Trabajan presencial o 100% en línea?", html! {
            <p class="muted">
                {"Trabajamos "}<b>{"100% en línea"}</b>{". La comunicación es por WhatsApp/llamada y \
                  entregamos todo en digital (PDF + renders/3D según el paquete). Si tu proyecto \
                  requiere coordinación local, lo revisamos caso por caso."}
            </p>
        }),
        ("¿Qué entregables incluyen los servicios?", html! {
            <p class="muted">
                {"Depende del paquete, pero normalmente incluye "}<b>{"planos en PDF"}</b>{", "}
                <b>{"modelado 3D"}</b>{" y "}<b>{"renders finales"}</b>{". Antes de iniciar, te \
                  compartimos exactamente qué se entrega y en qué formato."}
            </p>
        }),
        ("¿Cuánto tarda un proyecto?", html! {
            <p class="muted">
                {"Varía por alcance y complejidad. En la cotización te damos un "}
                <b>{"cronograma estimado"}</b>{" con fechas de avances y entrega final."}
            </p>
        }),
        ("¿Cuántas revisiones incluyen?", html! {
            <p class="muted">
                {"Incluimos un número de "}<b>{"revisiones definidas"}</b>{" por etapa (según el \
                  paquete). Nuestro objetivo es llegar al resultado final con un proceso claro y ordenado."}
            </p>
        }),
        ("¿Cómo es el pago?", html! {
            <p class="muted">
                {"Generalmente se maneja "}<b>{"anticipo"}</b>{" para iniciar y el resto contra \
                  avances o entrega, dependiendo del alcance. Te lo detallamos en la propuesta."}
            </p>
        }),
        ("¿Pueden trabajar proyectos fuera de Chiapas (MX / USA)?", html! {
            <p class="muted">
                {"Sí. Atendemos proyectos en "}<b>{"toda la República"}</b>{" y también en "}
                <b>{"EE. UU."}</b>{" de manera remota, con entregas digitales y seguimiento por \
                  mensajes/llamadas."}
            </p>
        }),
    ];

    html! {
        <section id="faq" class="section faq-section">
            <div class="container">
                <p class="kicker">{"FAQ"}</p>
                <h2>{"Preguntas frecuentes"}</h2>
                <p class="muted faq-sub">
                    {"Transparencia desde el inicio: proceso, entregables y tiempos."}
                </p>

                <div class="faq-grid">
                    <div class="faq-list">
                        {
                            questions.into_iter().enumerate().map(|(idx, (question, answer))| html! {
                                <FaqItem
                                    key={question}
                                    question={question}
                                    is_open={*open_index == Some(idx)}
                                    on_toggle={toggle(idx)}
                                >
                                    { answer }
                                </FaqItem>
                            }).collect::<Html>()
                        }
                    </div>

                    <aside class="card card-pad">
                        <p class="kicker">{"Contacto"}</p>
                        <h3 class="faq-aside-title">{"¿Tienes una duda específica?"}</h3>
                        <p class="muted">
                            {"Escríbenos por WhatsApp con tu idea (tipo de proyecto, ubicación, m² si aplica) \
                              y te orientamos con el siguiente paso."}
                        </p>

                        <a
                            class="btn btn-primary faq-cta"
                            href={config::whatsapp_direct_link()}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Hablar por WhatsApp"}
                        </a>

                        <p class="muted faq-tip">
                            {"Tip: comparte referencias (Pinterest/links) y tu presupuesto estimado \
                              para acelerar la propuesta."}
                        </p>
                    </aside>
                </div>
            </div>

            <style>
                {r#"
                .faq-section h2 {
                    max-width: 28ch;
                    margin-top: 0.5rem;
                }

                .faq-sub {
                    margin-top: 0.75rem;
                    max-width: 60ch;
                }

                .faq-grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .faq-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: start;
                    }
                }

                .faq-list {
                    display: grid;
                    gap: 12px;
                }

                .faq-item {
                    border: 1px solid var(--line);
                    border-radius: 16px;
                    overflow: hidden;
                    background: var(--bg);
                }

                .faq-item.open {
                    border-color: var(--line-strong);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font: inherit;
                    color: inherit;
                }

                .question-main {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                }

                .question-text {
                    font-weight: 500;
                }

                .question-hint {
                    font-size: 0.95rem;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    border: 1px solid var(--line);
                    border-radius: 50%;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                }

                .answer-divider {
                    margin-bottom: 1rem;
                }

                .faq-answer p {
                    margin: 0;
                    line-height: 1.6;
                }

                .faq-aside-title {
                    margin: 0.5rem 0;
                }

                .faq-cta {
                    margin-top: 1rem;
                }

                .faq-tip {
                    margin-top: 1rem;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </section>
    }
}
