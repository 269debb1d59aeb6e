use yew::prelude::*;
use yew_router::prelude::*;
use crate::catalog::{PROJECTS, IMAGES_PER_PROJECT};
use crate::gallery::{Category, Filter, GalleryState, Lightbox};
use crate::Route;

const FILTERS: [Filter; 5] = [
    Filter::Todos,
    Filter::Solo(Category::Fachada),
    Filter::Solo(Category::AreaSocial),
    Filter::Solo(Category::ProyectoCompleto),
    Filter::Solo(Category::Renders3d),
];

#[function_component(Proyectos)]
pub fn proyectos() -> Html {
    let state = use_state(GalleryState::default);
    let filtered = state.filtered(&PROJECTS);

    let set_filter = |filter: Filter| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.set_filter(filter));
        })
    };

    let open = |project: usize, image: usize| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.open(project, image));
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.close());
        })
    };

    let prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.prev_image());
        })
    };

    let next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.next_image());
        })
    };

    let jump = |image: usize| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(state.jump_to_image(image));
        })
    };

    let lightbox = match state.lightbox {
        Lightbox::Cerrado => html! {},
        Lightbox::Abierto { project, image } => {
            // el índice siempre proviene de la lista filtrada vigente:
            // set_filter cierra el lightbox antes de que cambie de tamaño
            let active = filtered[project];
            let active_image = &active.images[image];
            let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

            html! {
                <div class="lightbox-overlay" onclick={close.clone()} role="dialog" aria-modal="true">
                    <div class="lightbox-panel" onclick={stop}>
                        <div class="lightbox-bar">
                            <div class="lightbox-meta">
                                <p class="kicker">
                                    { active.category.label() }{" · "}{ active.location }
                                    { active.year.map(|y| format!(" · {}", y)).unwrap_or_default() }
                                </p>
                                <p class="lightbox-title">{ active.title }</p>
                            </div>
                            <div class="lightbox-actions">
                                <button type="button" class="btn" onclick={prev.clone()}>
                                    {"‹ Anterior"}
                                </button>
                                <button type="button" class="btn" onclick={next.clone()}>
                                    {"Siguiente ›"}
                                </button>
                                <button type="button" class="btn btn-primary" onclick={close.clone()}>
                                    {"Cerrar ✕"}
                                </button>
                            </div>
                        </div>

                        <div class="lightbox-media">
                            <img src={active_image.src} alt={active_image.alt} />
                        </div>

                        <div class="lightbox-thumbs">
                            <div class="thumbs-grid">
                                {
                                    active.images.iter().enumerate().map(|(idx, img)| html! {
                                        <button
                                            type="button"
                                            class={classes!("thumb", (idx == image).then(|| "active"))}
                                            onclick={jump(idx)}
                                            aria-label={format!("Cambiar a imagen {}", idx + 1)}
                                        >
                                            <img src={img.src} alt={img.alt} loading="lazy" />
                                        </button>
                                    }).collect::<Html>()
                                }
                            </div>
                            <p class="muted thumbs-caption">
                                { format!("Vista {} de {}", image + 1, IMAGES_PER_PROJECT) }
                            </p>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <main class="proyectos-page">
            <section class="section">
                <div class="container">
                    <p class="kicker">{"Proyectos"}</p>

                    <div class="header-grid">
                        <div>
                            <h1>{"Portafolio seleccionado: 4 proyectos, 4 vistas por proyecto."}</h1>
                            <p class="muted header-sub">
                                {"Una muestra breve para comunicar estilo, claridad espacial y nivel de \
                                  visualización. Si quieres ver un caso similar al tuyo, escríbenos."}
                            </p>
                            <div class="header-actions">
                                <Link<Route> to={Route::Contacto} classes="btn btn-primary">
                                    {"Solicitar cotización ↗"}
                                </Link<Route>>
                                <a class="btn" href="#galeria">{"Ver galería ↗"}</a>
                            </div>
                        </div>

                        <div class="card card-pad">
                            <p class="kicker">{"Filtrar"}</p>
                            <div class="filter-buttons">
                                {
                                    FILTERS.into_iter().map(|f| html! {
                                        <button
                                            type="button"
                                            class={classes!("btn", (state.filter == f).then(|| "active"))}
                                            onclick={set_filter(f)}
                                            aria-pressed={(state.filter == f).to_string()}
                                        >
                                            { f.label() }
                                        </button>
                                    }).collect::<Html>()
                                }
                            </div>
                            <p class="muted filter-count">
                                {"Mostrando: "}<b>{ filtered.len() }</b>{" proyecto(s)"}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <div class="divider"></div>

            <section id="galeria" class="section">
                <div class="container">
                    <div class="grid-2">
                        {
                            filtered.iter().enumerate().map(|(project_index, p)| html! {
                                <article class="card project-card" key={p.id}>
                                    <button
                                        type="button"
                                        class="cover-button"
                                        onclick={open(project_index, 0)}
                                        aria-label={format!("Abrir {}", p.title)}
                                    >
                                        <img
                                            src={p.images[0].src}
                                            alt={p.images[0].alt}
                                            class="cover-image"
                                            loading="lazy"
                                        />
                                    </button>

                                    <div class="card-pad">
                                        <p class="kicker">
                                            { p.category.label() }{" · "}{ p.location }
                                            { p.year.map(|y| format!(" · {}", y)).unwrap_or_default() }
                                        </p>
                                        <h3 class="project-title">{ p.title }</h3>
                                        <p class="muted">{ p.summary }</p>

                                        <div class="thumbs-grid">
                                            {
                                                p.images.iter().enumerate().map(|(image_index, img)| html! {
                                                    <button
                                                        type="button"
                                                        class="thumb"
                                                        onclick={open(project_index, image_index)}
                                                        aria-label={format!("Abrir imagen {} de {}", image_index + 1, p.title)}
                                                    >
                                                        <img src={img.src} alt={img.alt} loading="lazy" />
                                                    </button>
                                                }).collect::<Html>()
                                            }
                                        </div>

                                        <div class="project-actions">
                                            <Link<Route> to={Route::Contacto} classes="btn">
                                                {"Quiero algo similar ↗"}
                                            </Link<Route>>
                                            <button
                                                type="button"
                                                class="btn btn-primary"
                                                onclick={open(project_index, 0)}
                                            >
                                                {"Ver proyecto ↗"}
                                            </button>
                                        </div>
                                    </div>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            { lightbox }

            <style>
                {r#"
                .proyectos-page h1 {
                    max-width: 26ch;
                    margin-top: 0.75rem;
                }

                .header-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 0.5rem;
                }

                @media (min-width: 1000px) {
                    .header-grid {
                        grid-template-columns: 1.1fr 0.9fr;
                        align-items: end;
                    }
                }

                .header-sub {
                    max-width: 70ch;
                    margin-top: 1rem;
                }

                .header-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                }

                .filter-buttons {
                    margin-top: 0.75rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 8px;
                }

                .filter-buttons .btn.active {
                    border-color: var(--line-strong);
                    background: rgba(0, 0, 0, 0.04);
                }

                .filter-count {
                    margin: 0.75rem 0 0;
                    font-size: 0.95rem;
                }

                .project-card {
                    overflow: hidden;
                }

                .cover-button {
                    display: block;
                    width: 100%;
                    padding: 0;
                    border: none;
                    background: none;
                    cursor: pointer;
                }

                .cover-image {
                    width: 100%;
                    height: 260px;
                    object-fit: cover;
                    display: block;
                }

                .project-title {
                    margin-top: 0.5rem;
                }

                .thumbs-grid {
                    margin-top: 1rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 8px;
                }

                .thumb {
                    padding: 0;
                    border: 1px solid var(--line);
                    border-radius: 4px;
                    overflow: hidden;
                    cursor: pointer;
                    background: none;
                    opacity: 0.85;
                }

                .thumb.active,
                .thumb:hover {
                    border-color: var(--line-strong);
                    opacity: 1;
                }

                .thumb img {
                    width: 100%;
                    height: 80px;
                    object-fit: cover;
                    display: block;
                }

                .project-actions {
                    margin-top: 1.25rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 12px;
                }

                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.55);
                }

                .lightbox-panel {
                    width: 100%;
                    max-width: 980px;
                    background: var(--bg);
                    border: 1px solid var(--line);
                    border-radius: 16px;
                    overflow: hidden;
                }

                .lightbox-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 12px;
                    padding: 12px 16px;
                    border-bottom: 1px solid var(--line);
                }

                .lightbox-meta {
                    min-width: 0;
                }

                .lightbox-title {
                    margin: 2px 0 0;
                    font-weight: 500;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }

                .lightbox-actions {
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    flex-shrink: 0;
                }

                .lightbox-media {
                    background: var(--surface);
                }

                .lightbox-media img {
                    width: 100%;
                    max-height: 72vh;
                    object-fit: contain;
                    display: block;
                }

                .lightbox-thumbs {
                    padding: 1rem;
                    border-top: 1px solid var(--line);
                }

                .lightbox-thumbs .thumb img {
                    height: 64px;
                }

                .thumbs-caption {
                    margin: 0.75rem 0 0;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </main>
    }
}
