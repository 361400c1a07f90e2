use yew::prelude::*;

const FEATURES: &[(&str, &str)] = &[
    ("✨", "Tecnologia avançada"),
    ("</>", "Otimização de processos"),
    ("🖥️", "Infraestrutura robusta"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-container">
                <div class="about-text">
                    <h2>{"Transformamos o poder da inteligência artificial em resultados reais para o seu negócio."}</h2>
                    <p>
                        {"Na Eben AI, unimos tecnologia de ponta e soluções personalizadas para acelerar o seu negócio e aumentar a eficiência da sua empresa. Sem complicações, apenas resultados."}
                    </p>
                    <ul class="about-features">
                        { FEATURES.iter().map(|(icon, text)| html! {
                            <li><span class="feature-icon">{*icon}</span><span>{*text}</span></li>
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div class="about-image">
                    <img
                        src="https://raw.githubusercontent.com/RuiRDA/ebenai/refs/heads/main/src/ebenai-connections.webp"
                        alt="AI Technology"
                        loading="lazy"
                    />
                </div>
            </div>
            <style>
                {r#"
                .about-section {
                    padding: 5rem 0;
                    position: relative;
                }
                .about-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .about-text, .about-image {
                    flex: 1;
                }
                .about-text h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .about-text p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .about-features {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1rem;
                    color: #4b5563;
                }
                .about-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .feature-icon {
                    width: 1.5rem;
                    text-align: center;
                }
                .about-image img {
                    width: 100%;
                    border-radius: 0.75rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                @media (max-width: 768px) {
                    .about-container {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
