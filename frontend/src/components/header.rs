use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::Route;
use crate::utils::scroll::scroll_to_section;

const NAV_LINKS: &[(&str, &str)] = &[
    ("services", "Serviços"),
    ("about", "Sobre"),
    ("contact", "Contato"),
];

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <nav class="header-nav">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img
                        src="https://github.com/RuiRDA/ebenai/blob/main/src/favicon_io/logo_eben_ai_1024x1024.png?raw=true"
                        alt="Eben AI Solutions Logo"
                    />
                    <span>{"Eben AI Solutions"}</span>
                </Link<Route>>
                <div class="header-links">
                    { NAV_LINKS.iter().map(|(id, label)| {
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                        });
                        html! {
                            <a href={format!("#{}", id)} class="nav-link" {onclick}>{*label}</a>
                        }
                    }).collect::<Html>() }
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2.5rem 1rem;
                    position: relative;
                }
                .header-nav {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    text-decoration: none;
                }
                .header-logo img {
                    width: 3rem;
                    height: auto;
                }
                .header-logo span {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                }
                .header-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #0284C7;
                }
                @media (max-width: 768px) {
                    .header-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
