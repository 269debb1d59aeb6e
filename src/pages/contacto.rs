use yew::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::config;
use crate::intake::{self, ContactDraft, Service};

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: String,
    value: String,
    #[prop_or_default]
    placeholder: String,
    #[prop_or_default]
    error: Option<&'static str>,
    onchange: Callback<String>,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="form-field">
            <label class="kicker">{&props.label}</label>
            <input
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-invalid={props.error.is_some().to_string()}
                {onchange}
            />
            {
                if let Some(error) = props.error {
                    html! { <p class="field-error muted">{error}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceSelectProps {
    value: Service,
    onchange: Callback<Service>,
}

#[function_component(ServiceSelect)]
fn service_select(props: &ServiceSelectProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(service) = Service::from_label(&select.value()) {
                cb.emit(service);
            }
        })
    };

    html! {
        <div class="form-field">
            <label class="kicker">{"Servicio"}</label>
            <select {onchange}>
                {
                    Service::ALL.into_iter().map(|s| html! {
                        <option value={s.label()} selected={s == props.value}>
                            {s.label()}
                        </option>
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextAreaProps {
    label: String,
    value: String,
    #[prop_or_default]
    placeholder: String,
    #[prop_or_default]
    error: Option<&'static str>,
    onchange: Callback<String>,
}

#[function_component(TextArea)]
fn text_area(props: &TextAreaProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };

    html! {
        <div class="form-field">
            <label class="kicker">{&props.label}</label>
            <textarea
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                rows="6"
                aria-invalid={props.error.is_some().to_string()}
                {onchange}
            />
            {
                if let Some(error) = props.error {
                    html! { <p class="field-error muted">{error}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn update_field(
    draft: &UseStateHandle<ContactDraft>,
    apply: fn(&mut ContactDraft, String),
) -> Callback<String> {
    let draft = draft.clone();
    Callback::from(move |value: String| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        draft.set(next);
    })
}

#[function_component(Contacto)]
pub fn contacto() -> Html {
    let draft = use_state(ContactDraft::default);
    let touched = use_state(|| false);

    let errors = intake::validate(&draft);
    let is_valid = errors.is_valid();
    // los errores solo se muestran después del primer intento de envío
    let shown = |e: Option<&'static str>| if *touched { e } else { None };

    let onsubmit = {
        let draft = draft.clone();
        let touched = touched.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched.set(true);
            if !intake::validate(&draft).is_valid() {
                return;
            }
            let text = intake::build_message(&draft);
            let url = intake::build_deep_link(config::WHATSAPP_NUMBER, &text);
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };

    let onclear = {
        let draft = draft.clone();
        let touched = touched.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ContactDraft::default());
            touched.set(false);
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |service: Service| {
            draft.set(ContactDraft { service, ..(*draft).clone() });
        })
    };

    html! {
        <main class="contacto-page">
            <section class="section">
                <div class="container">
                    <p class="kicker">{"Contacto"}</p>
                    <h1>{"Cuéntanos tu proyecto y te enviamos una propuesta clara."}</h1>
                    <p class="muted intro">
                        {"Este formulario abre WhatsApp con un mensaje prellenado. No guardamos datos aquí: \
                          tú controlas el envío final desde WhatsApp."}
                    </p>
                </div>
            </section>

            <div class="divider"></div>

            <section class="section">
                <div class="container contacto-grid">
                    <form class="card card-pad" {onsubmit}>
                        <p class="kicker">{"Formulario"}</p>

                        <div class="form-grid">
                            <Field
                                label="Nombre"
                                value={draft.name.clone()}
                                placeholder="Tu nombre"
                                error={shown(errors.name)}
                                onchange={update_field(&draft, |d, v| d.name = v)}
                            />
                            <Field
                                label="WhatsApp / Teléfono"
                                value={draft.phone.clone()}
                                placeholder="Ej. 81 1234 5678"
                                error={shown(errors.phone)}
                                onchange={update_field(&draft, |d, v| d.phone = v)}
                            />
                            <Field
                                label="Email (opcional)"
                                value={draft.email.clone()}
                                placeholder="tucorreo@email.com"
                                onchange={update_field(&draft, |d, v| d.email = v)}
                            />
                            <ServiceSelect value={draft.service} onchange={on_service} />
                            <Field
                                label="Ubicación"
                                value={draft.location.clone()}
                                placeholder="Ciudad / Estado"
                                error={shown(errors.location)}
                                onchange={update_field(&draft, |d, v| d.location = v)}
                            />
                            <Field
                                label="Presupuesto estimado (opcional)"
                                value={draft.budget.clone()}
                                placeholder="Ej. $80,000 MXN"
                                onchange={update_field(&draft, |d, v| d.budget = v)}
                            />
                            <Field
                                label="Tiempo deseado (opcional)"
                                value={draft.timeframe.clone()}
                                placeholder="Ej. 2–3 semanas"
                                onchange={update_field(&draft, |d, v| d.timeframe = v)}
                            />
                        </div>

                        <TextArea
                            label="Detalles del proyecto"
                            value={draft.message.clone()}
                            placeholder="Ej. Quiero remodelar sala-comedor-cocina. Tengo medidas y referencias. Busco estilo minimalista y renders..."
                            error={shown(errors.message)}
                            onchange={update_field(&draft, |d, v| d.message = v)}
                        />

                        <div class="divider form-divider"></div>

                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary">
                                {"Enviar por WhatsApp ↗"}
                            </button>
                            <button type="button" class="btn" onclick={onclear}>
                                {"Limpiar"}
                            </button>
                            {
                                if *touched && !is_valid {
                                    html! {
                                        <p class="muted form-hint">
                                            {"Revisa los campos marcados para continuar."}
                                        </p>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </form>

                    <aside class="card card-pad">
                        <p class="kicker">{"Referencia"}</p>
                        <h3>{"Atención 100% en línea"}</h3>
                        <p class="muted">
                            {"Estudio ubicado en Chiapas. Atendemos proyectos en México y EE. UU. \
                              con entregas digitales y seguimiento por WhatsApp."}
                        </p>

                        <div class="divider aside-divider"></div>

                        <div class="info-rows">
                            <div class="info-row">
                                <p class="info-title">{"Ubicación"}</p>
                                <p class="muted">{"Tuxtla Gutiérrez, Chiapas (referencia)"}</p>
                            </div>
                            <div class="info-row">
                                <p class="info-title">{"Qué enviar"}</p>
                                <p class="muted">{"Ubicación, m² (si aplica), referencias y presupuesto."}</p>
                            </div>
                        </div>

                        <div class="divider aside-divider"></div>

                        <a
                            class="btn btn-primary direct-link"
                            href={config::whatsapp_direct_link()}
                            target="_blank"
                            rel="noreferrer"
                        >
                            {"Abrir WhatsApp directo ↗"}
                        </a>
                    </aside>
                </div>
            </section>

            <style>
                {r#"
                .contacto-page .intro {
                    max-width: 70ch;
                    margin-top: 1rem;
                }

                .contacto-page h1 {
                    margin-top: 0.75rem;
                    max-width: 24ch;
                }

                .contacto-grid {
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 1000px) {
                    .contacto-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: start;
                    }
                }

                .form-grid {
                    display: grid;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                @media (min-width: 700px) {
                    .form-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .form-field label {
                    display: block;
                    margin-bottom: 8px;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    border: 1px solid var(--line);
                    border-radius: 8px;
                    padding: 12px 16px;
                    background: var(--surface);
                    font: inherit;
                    color: var(--fg);
                }

                .form-field {
                    margin-top: 0.5rem;
                }

                .field-error {
                    margin: 8px 0 0;
                    font-size: 0.95rem;
                }

                .form-divider {
                    margin: 1.5rem 0;
                }

                .form-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 12px;
                }

                .form-hint {
                    margin: 0;
                    font-size: 0.95rem;
                }

                .aside-divider {
                    margin: 1.25rem 0;
                }

                .info-rows {
                    display: grid;
                    gap: 12px;
                }

                .info-row {
                    border: 1px solid var(--line);
                    border-radius: 8px;
                    padding: 1rem;
                }

                .info-title {
                    margin: 0 0 4px;
                    font-weight: 500;
                }

                .info-row .muted {
                    margin: 0;
                    font-size: 0.95rem;
                }

                .direct-link {
                    width: 100%;
                    justify-content: center;
                }
                "#}
            </style>
        </main>
    }
}
