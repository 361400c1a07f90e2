use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use crate::Route;
use crate::utils::scroll::scroll_to_top;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_title("Política de Privacidade | Eben AI Solutions".to_string());

    // Arriving from the consent link would otherwise land mid-page.
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content">
            <div>
                <Link<Route> to={Route::Home} classes="back-link">{"‹ Voltar"}</Link<Route>>
                <h1>{"Política de Privacidade"}</h1>

                <section>
                    <h2>{"1. Recolha e Utilização de Informação"}</h2>
                    <p>{"A Eben AI Solutions recolhe informações pessoais que você fornece voluntariamente ao utilizar nosso site e serviços. Estas informações podem incluir:"}</p>
                    <ul>
                        <li>{"Nome completo"}</li>
                        <li>{"Endereço de e-mail"}</li>
                        <li>{"Número de telefone/WhatsApp"}</li>
                        <li>{"Informações da empresa"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"2. Política de Cookies"}</h2>
                    <p>{"Utilizamos cookies para melhorar sua experiência de navegação. Os cookies são pequenos arquivos de texto armazenados no seu dispositivo que nos ajudam a:"}</p>
                    <ul>
                        <li>{"Manter sua sessão ativa"}</li>
                        <li>{"Lembrar suas preferências"}</li>
                        <li>{"Analisar como você usa nosso site"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"3. Medidas de Proteção de Dados"}</h2>
                    <p>{"Implementamos medidas de segurança técnicas e organizacionais apropriadas para proteger suas informações pessoais contra acesso não autorizado, alteração, divulgação ou destruição."}</p>
                </section>

                <section>
                    <h2>{"4. Seus Direitos"}</h2>
                    <p>{"De acordo com o RGPD, você tem os seguintes direitos:"}</p>
                    <ul>
                        <li>{"Direito de acesso aos seus dados pessoais"}</li>
                        <li>{"Direito de retificação"}</li>
                        <li>{"Direito ao apagamento (\"direito a ser esquecido\")"}</li>
                        <li>{"Direito à limitação do tratamento"}</li>
                        <li>{"Direito de portabilidade dos dados"}</li>
                        <li>{"Direito de oposição"}</li>
                    </ul>
                </section>

                <section>
                    <h2>{"5. Informações de Contato"}</h2>
                    <p>{"Para exercer seus direitos ou esclarecer dúvidas sobre nossa política de privacidade, entre em contato conosco:"}</p>
                    <p>
                        {"Email: "}<a href="mailto:privacy@ebenai.com">{"privacy@ebenai.com"}</a><br />
                        {"Telefone: +351 912 345 678"}<br />
                        {"Endereço: Rua Example, 123, Lisboa, Portugal"}
                    </p>
                </section>

                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{"Voltar à página inicial"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .legal-content {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                    padding: 4rem 1rem;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .legal-content > div {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .back-link {
                    display: inline-block;
                    color: #0284C7;
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .legal-content h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .legal-content section {
                    margin-bottom: 2rem;
                }
                .legal-content h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .legal-content p, .legal-content li {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .legal-content ul {
                    list-style-type: disc;
                    padding-left: 1.5rem;
                }
                .legal-content li {
                    margin-bottom: 0.5rem;
                }
                .legal-links {
                    margin-top: 2rem;
                    text-align: center;
                }
                .legal-links a, .legal-content section a {
                    color: #0284C7;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .legal-links a:hover, .back-link:hover {
                    color: #0369A1;
                }
                "#}
            </style>
        </div>
    }
}
