use yew::prelude::*;
use crate::utils::scroll::scroll_to_section;

#[function_component(Hero)]
pub fn hero() -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <div class="hero">
            <div class="hero-content">
                <h1>{"Otimize os resultados do seu negócio com IA"}</h1>
                <p class="hero-subtitle">
                    {"Faça mais vendas no piloto automático e converta mais leads para o seu negócio com um \"funcionário\" digital que nunca dorme, não tira férias e não reclama!"}
                </p>
                <button class="hero-cta" {onclick}>
                    {"Comece Agora"}
                    <span class="cta-arrow">{"›"}</span>
                </button>
            </div>
            <style>
                {r#"
                .hero {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2.5rem 1rem;
                }
                .hero-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.5;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, #0284C7, #1E3A8A);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #0284C7;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #0369A1;
                }
                .cta-arrow {
                    font-size: 1.25rem;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
