use yew::prelude::*;
use yew_router::prelude::*;
use chrono::{Datelike, Local};
use crate::Route;

fn copyright_line(year: i32) -> String {
    format!("© {} Todos Os Direitos Reservados Por EBEN IA SOLUTIONS", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img
                            src="https://raw.githubusercontent.com/RuiRDA/ebenai/refs/heads/main/arts_and_logos/Novo%20logo%20eben%20AI.png"
                            alt="Eben AI Solutions Logo"
                        />
                        <div>
                            <span class="footer-name">{"Eben AI Solutions"}</span>
                            <p>
                                {"Agentes de inteligência artificial avançados"}
                                <br />
                                {"para empresas e negócios."}
                            </p>
                            <a href="mailto:info@ebenaisolutions.com">
                                {"Envie-nos um e-mail: info@ebenaisolutions.com"}
                            </a>
                        </div>
                    </div>

                    <div class="footer-links">
                        <a href="#home">{"Início"}</a>
                        <a href="#services">{"Serviços"}</a>
                        <a href="#about">{"Sobre"}</a>
                        <a href="#contact">{"Contato"}</a>
                        <Link<Route> to={Route::Privacy}>{"Termos"}</Link<Route>>
                    </div>

                    <div class="footer-social">
                        <a href="#" aria-label="Instagram">
                            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <rect x="2" y="2" width="20" height="20" rx="5" ry="5"/>
                                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>
                                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>
                            </svg>
                        </a>
                        <a href="#" aria-label="YouTube">
                            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z"/>
                                <polygon points="9.75 15.02 15.5 11.75 9.75 8.48 9.75 15.02"/>
                            </svg>
                        </a>
                    </div>
                </div>
                <hr />
                <p class="copyright">{copyright_line(year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #f3f4f6;
                    padding: 2rem 0;
                }
                .footer-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                }
                .footer-brand img {
                    width: 2rem;
                    height: auto;
                }
                .footer-name {
                    display: block;
                    font-weight: 700;
                    color: #111827;
                }
                .footer-brand p, .footer-brand a {
                    color: #4b5563;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }
                .footer-links a, .footer-social a {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .footer-links a:hover, .footer-social a:hover, .footer-brand a:hover {
                    color: #0284C7;
                }
                .footer-social {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                }
                .site-footer hr {
                    border: none;
                    border-top: 1px solid #d1d5db;
                    margin-bottom: 1rem;
                }
                .copyright {
                    text-align: center;
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                    .footer-links {
                        display: none;
                    }
                    .footer-social {
                        justify-content: flex-start;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Todos Os Direitos Reservados Por EBEN IA SOLUTIONS"
        );
    }
}
