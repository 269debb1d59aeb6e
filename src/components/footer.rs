use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-top">
                    <div class="footer-brand">
                        <p class="footer-name">{"AES Arquitectos"}</p>
                        <p class="muted footer-desc">
                            {"Estudio de arquitectura trabajando 100% en línea desde Chiapas, \
                              México. Diseño de fachadas, áreas sociales y proyectos completos."}
                        </p>
                    </div>

                    <nav class="footer-links">
                        <Link<Route> to={Route::Proyectos} classes="footer-link">{"Proyectos"}</Link<Route>>
                        <Link<Route> to={Route::Servicios} classes="footer-link">{"Servicios"}</Link<Route>>
                        <Link<Route> to={Route::Contacto} classes="footer-link">{"Contacto"}</Link<Route>>
                    </nav>

                    <div class="footer-contact">
                        <a href="mailto:contacto@aesarquitectos.com" class="footer-link">
                            {"contacto@aesarquitectos.com"}
                        </a>
                        <span class="footer-link muted">{"México · Atención en línea"}</span>
                    </div>

                    <div class="footer-social">
                        <a
                            href="https://www.instagram.com/aesarquitectos"
                            target="_blank"
                            rel="noreferrer"
                            aria-label="Instagram"
                            class="footer-link"
                        >
                            {"Instagram"}
                        </a>
                        <a
                            href="https://www.facebook.com/AESarquitectura"
                            target="_blank"
                            rel="noreferrer"
                            aria-label="Facebook"
                            class="footer-link"
                        >
                            {"Facebook"}
                        </a>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span class="muted">{"© 2025 AES Arquitectos. Todos los derechos reservados."}</span>
                    <Link<Route> to={Route::Contacto} classes="btn">
                        {"Cotizar proyecto ↗"}
                    </Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--line);
                    background: var(--bg);
                }

                .footer-inner {
                    padding: 3rem 1rem;
                }

                .footer-top {
                    display: grid;
                    gap: 1.75rem;
                }

                @media (min-width: 900px) {
                    .footer-top {
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                    }
                }

                .footer-name {
                    margin: 0;
                    font-weight: 700;
                    font-size: 1.1rem;
                    letter-spacing: -0.02em;
                }

                .footer-desc {
                    max-width: 420px;
                    margin: 6px 0 0;
                }

                .footer-links,
                .footer-contact,
                .footer-social {
                    display: grid;
                    gap: 0.75rem;
                    align-content: start;
                }

                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    align-items: start;
                }

                .footer-link {
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 180ms ease;
                }

                .footer-link:hover {
                    color: var(--fg);
                }

                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--line);
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                }
                "#}
            </style>
        </footer>
    }
}
