use yew::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🤖",
        title: "Processos Internos Automatizados",
        description: "Criamos um agente de IA que utiliza as aplicações utilizadas na sua empresa para agir como um funcionário real, economizando tempo na gestão de documentos e de processos internos.",
    },
    Service {
        icon: "💬",
        title: "Conversas com Agentes IA",
        description: "Criamos funcionários digitais realistas para conversar e converter os seus leads 24/7 por texto ou áudio, 365 dias por ano, sem tirar férias e sem reclamar.",
    },
    Service {
        icon: "📈",
        title: "Redes Sociais em Piloto Automático",
        description: "Criamos um agente de IA que cria conteúdos personalizados e faz a gestão automática das suas redes sociais, para uma presença digital cada vez melhor.",
    },
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-container">
                <h2>{"Os Nossos Serviços"}</h2>
                <div class="services-grid">
                    { SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <span class="service-icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                .services-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                    position: relative;
                }
                .section-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .services-section h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                    position: relative;
                    z-index: 10;
                }
                .service-card:hover {
                    transform: translateY(-0.5rem);
                }
                .service-icon {
                    font-size: 3rem;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 1rem 0 0.5rem 0;
                }
                .service-card p {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
