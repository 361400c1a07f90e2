use yew::prelude::*;

const STEPS: &[(&str, &str)] = &[
    (
        "Consultoria gratuita",
        "Converse com um engenheiro de sistemas real (normalmente +100€/hora) e discuta as necessidades e objetivos do seu projeto. Vamos ouvir atentamente para servir as suas necessidades o melhor possível.",
    ),
    (
        "Análise e Proposta",
        "Com base na sua consulta, iremos fornecer uma análise detalhada, incluindo etapas, propostas, orçamento e algumas possíveis modificações ou extensões ao seu sistema.",
    ),
    (
        "Início do projeto",
        "Com a proposta alinhada e acertada, agendaremos uma reunião inicial para dar início à implementação.",
    ),
];

#[function_component(StepsSection)]
pub fn steps_section() -> Html {
    html! {
        <section id="steps" class="steps-section">
            <div class="steps-container">
                <h2>{"Como funciona"}</h2>
                <p class="steps-intro">
                    {"A automação é complicada - mas nós podemos implementá-la por si!"}
                    <br />
                    {"Descubra como a IA pode transformar o seu negócio em 3 etapas simples"}
                </p>
                <div class="steps-row">
                    { STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                        <div class="step-card">
                            <div class="step-number">{index + 1}</div>
                            <h4>{*title}</h4>
                            <p>{*description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .steps-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                    position: relative;
                }
                .steps-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .steps-container h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #0284C7;
                    margin-bottom: 1rem;
                }
                .steps-intro {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                }
                .steps-row {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }
                .step-card {
                    flex: 1;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .step-number {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #0284C7;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .step-card h4 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .step-card p {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .steps-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
