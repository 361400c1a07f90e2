use yew::prelude::*;
use web_sys::MouseEvent;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Como a Eben AI pode ajudar o meu negócio?",
        answer: "Podemos economizar centenas de horas de trabalho manual para os seus funcionários, automatizando tarefas repetitivas e entediantes, como prospecção outbound, atendimento ao cliente, agendamentos, criação de conteúdo, entre outros. Ao implementar estas soluções, não apenas aumentamos a eficiência, mas também fazemos com que a sua equipa tenha mais tempo disponível para se concentrar em atividades mais estratégicas e criativas, gerando resultados ainda mais impactantes para o seu negócio.",
    },
    FaqEntry {
        question: "Quanto tempo demora a criar o meu projeto?",
        answer: "Normalmente, as nossas soluções são totalmente implementadas entre 1 a 2 semanas, englobando todo o processo de desenvolvimento e integração. Com uma abordagem ágil e eficiente, garantimos que a sua equipa possa começar a beneficiar dos nossos serviços rapidamente, sem comprometer a qualidade ou a precisão das entregas.",
    },
    FaqEntry {
        question: "Qual é a minha garantia?",
        answer: "Oferecemos 30 dias de garantia após a implementação da sua solução de IA, com reembolso total caso não fique totalmente satisfeito com os resultados obtidos. Queremos garantir que a sua experiência seja positiva e que os benefícios da nossa solução atendam plenamente às suas necessidades.",
    },
    FaqEntry {
        question: "Como é que as Soluções de IA são criadas?",
        answer: "Nós passamos pelo processo de planeamento e arquitetura do projeto com a nossa equipa e levamos o projeto para plataformas de integração de sistemas e IA, como o make.com, n8n, flowise, entre outros.",
    },
    FaqEntry {
        question: "Como será a nossa comunicação?",
        answer: "Para a maioria das empresas, a nossa comunicação será feita diretamente pelo WhatsApp. Além disso, durante o desenvolvimento do projeto e fase de testes, oferecemos suporte contínuo para acompanhar atualizações, resolver possíveis erros de sistema e garantir que o progresso esteja sempre alinhado com os objetivos estabelecidos.",
    },
    FaqEntry {
        question: "E se algo der errado com a automação?",
        answer: "Seremos notificados imediatamente sempre que ocorrer algum problema no sistema e resolveremos rapidamente, garantindo que a operação continue a funcionar sem interrupções.",
    },
    FaqEntry {
        question: "Preciso de conhecimentos técnicos para usar os sistemas automatizados?",
        answer: "Nós temos um processo de entrega simples e transparente que instrui a sua equipa a utilizar os sistemas que entregamos, sem precisar de saber programar ou investir dezenas de horas para aprender novas ferramentas.",
    },
];

/// Clicking the open question closes it, any other question replaces it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"›"}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-container">
                <h2>{"Perguntas frequentes"}</h2>
                <div class="faq-list">
                    {
                        FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                            let on_toggle = {
                                let open_index = open_index.clone();
                                Callback::from(move |_: ()| open_index.set(toggle(*open_index, index)))
                            };
                            html! {
                                <FaqItem
                                    key={index}
                                    question={entry.question}
                                    answer={entry.answer}
                                    is_open={*open_index == Some(index)}
                                    {on_toggle}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .faq-section {
                    padding: 5rem 0;
                    background: #fff;
                }
                .faq-container {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .faq-container h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .faq-question {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    padding: 1rem 1.5rem;
                    text-align: left;
                    background: #fff;
                    border: none;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .question-text {
                    font-size: 1.125rem;
                    font-weight: 500;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    transition: transform 0.2s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(90deg);
                }
                .faq-answer {
                    padding: 1rem 1.5rem;
                    background: #f9fafb;
                    color: #374151;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_item_closes_it() {
        let open = toggle(None, 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 2), None);
    }

    #[test]
    fn clicking_another_item_switches() {
        let open = toggle(None, 2);
        assert_eq!(toggle(open, 5), Some(5));
    }

    #[test]
    fn has_the_seven_questions() {
        assert_eq!(FAQ_ENTRIES.len(), 7);
        assert!(FAQ_ENTRIES.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }
}
