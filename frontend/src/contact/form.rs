use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use crate::Route;
use crate::config;
use super::form_state::{FormAction, FormState};
use super::models::{Field, SubmitStatus, ValidationErrors};
use super::webhook;

fn input_class(errors: &ValidationErrors, field: Field) -> Classes {
    classes!("form-input", errors.has(field).then(|| "has-error"))
}

fn field_error(errors: &ValidationErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! {
            <p class="field-error">
                <span class="alert-icon">{"⚠"}</span>
                {message}
            </p>
        },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormState::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting {
                return;
            }
            match form.prepare_submission() {
                Err(errors) => form.dispatch(FormAction::Rejected(errors)),
                Ok(lead) => {
                    form.dispatch(FormAction::Started);
                    let form = form.clone();
                    spawn_local(async move {
                        let delivered = webhook::deliver(config::get_webhook_url(), &lead).await;
                        form.dispatch(FormAction::Finished { delivered });
                    });
                }
            }
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetFullName(input.value()));
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetEmail(input.value()));
        })
    };

    let on_whatsapp = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetWhatsApp(input.value()));
        })
    };

    let on_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetConsent(input.checked()));
        })
    };

    let errors = &form.errors;

    html! {
        <section id="contact" class="contact-section">
            <div class="dot-pattern"></div>
            <div class="contact-container">
                <h2>{"Vamos Conversar?"}</h2>
                <p class="contact-intro">
                    {"Investimos fortemente no início de cada projeto, assumindo 100% do risco para que você não precise (eses projetos podem levar semanas ou até meses). Por causa disso, trabalhamos com apenas um número reduzido de empresas em cada mês, para entregar resultados incomparáveis e com a máxima qualidade. Comece por preencher o nosso formulário:"}
                </p>

                <form {onsubmit} class="contact-form">
                    <div class="form-grid">
                        <div class="form-field">
                            <label>
                                {"Nome Completo "}<span class="required">{"*"}</span>
                                <button type="button" class="hint" title="Digite seu nome completo">{"ⓘ"}</button>
                            </label>
                            <input
                                type="text"
                                name="fullName"
                                class={input_class(errors, Field::FullName)}
                                value={form.lead.full_name.clone()}
                                oninput={on_name}
                                placeholder="João Silva"
                            />
                            { field_error(errors, Field::FullName) }
                        </div>

                        <div class="form-field">
                            <label>
                                {"Email "}<span class="required">{"*"}</span>
                                <button type="button" class="hint" title="Digite seu email profissional">{"ⓘ"}</button>
                            </label>
                            <input
                                type="email"
                                name="email"
                                class={input_class(errors, Field::Email)}
                                value={form.lead.email.clone()}
                                oninput={on_email}
                                placeholder="joao.silva@empresa.com"
                            />
                            { field_error(errors, Field::Email) }
                        </div>

                        <div class="form-field">
                            <label>
                                {"WhatsApp "}<span class="required">{"*"}</span>
                                <button type="button" class="hint" title="Digite seu número WhatsApp português">{"ⓘ"}</button>
                            </label>
                            <div class="phone-input-wrapper">
                                <span class="phone-icon">{"📱"}</span>
                                <input
                                    type="tel"
                                    name="whatsapp"
                                    class={classes!(input_class(errors, Field::WhatsApp), "with-icon")}
                                    value={form.lead.whatsapp.clone()}
                                    oninput={on_whatsapp}
                                    placeholder="+351 912 345 678"
                                />
                            </div>
                            <p class="field-help">{"Digite seu número WhatsApp português"}</p>
                            { field_error(errors, Field::WhatsApp) }
                        </div>

                        <div class="form-field full-width">
                            <label class="consent-label">
                                <input
                                    type="checkbox"
                                    name="gdprConsent"
                                    checked={form.lead.gdpr_consent}
                                    onchange={on_consent}
                                />
                                <span>
                                    {"Concordo com o processamento dos meus dados pessoais de acordo com a "}
                                    <Link<Route> to={Route::Privacy} classes="consent-link">
                                        {"Política de Privacidade"}
                                    </Link<Route>>
                                    <span class="required">{" *"}</span>
                                </span>
                            </label>
                            { field_error(errors, Field::GdprConsent) }
                        </div>

                        <div class="form-field full-width">
                            <button
                                type="submit"
                                class={classes!("submit-button", form.submitting.then(|| "busy"))}
                                disabled={form.submitting}
                            >
                                { if form.submitting { "Enviando..." } else { "Enviar Mensagem" } }
                            </button>
                            {
                                match form.status {
                                    SubmitStatus::Success => html! {
                                        <p class="status-message success">
                                            {"Mensagem enviada com sucesso! Entraremos em contato em breve."}
                                        </p>
                                    },
                                    SubmitStatus::Error => html! {
                                        <p class="status-message error">
                                            {"Ocorreu um erro ao enviar a mensagem. Por favor, tente novamente."}
                                        </p>
                                    },
                                    SubmitStatus::Idle => html! {},
                                }
                            }
                        </div>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    padding: 5rem 0;
                    background: #f9fafb;
                }
                .dot-pattern {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    background-image: radial-gradient(#000 1px, transparent 1px);
                    background-size: 20px 20px;
                    pointer-events: none;
                }
                .contact-container {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .contact-container h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    text-align: center;
                    color: #1f2937;
                    margin-bottom: 2rem;
                }
                .contact-intro {
                    max-width: 42rem;
                    margin: 0 auto 3rem auto;
                    text-align: center;
                    color: #374151;
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .contact-form {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .form-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field.full-width {
                    grid-column: span 2;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .required {
                    color: #ef4444;
                }
                .hint {
                    margin-left: 0.5rem;
                    border: none;
                    background: none;
                    cursor: help;
                    color: #6b7280;
                }
                .form-input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #d1d5db;
                    background: #fff;
                    transition: all 0.2s ease;
                    box-sizing: border-box;
                }
                .form-input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #0284C7;
                }
                .form-input.has-error {
                    border-color: #ef4444;
                }
                .form-input.has-error:focus {
                    box-shadow: 0 0 0 2px #ef4444;
                }
                .phone-input-wrapper {
                    position: relative;
                }
                .phone-icon {
                    position: absolute;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: #9ca3af;
                }
                .form-input.with-icon {
                    padding-left: 3rem;
                }
                .field-help {
                    margin-top: 0.25rem;
                    font-size: 0.75rem;
                    color: #4b5563;
                }
                .field-error {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #ef4444;
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .consent-label {
                    display: flex !important;
                    align-items: flex-start;
                    gap: 0.5rem;
                    cursor: pointer;
                }
                .consent-label input {
                    margin-top: 0.25rem;
                }
                .consent-link {
                    color: #0284C7;
                    margin-left: 0.25rem;
                }
                .consent-link:hover {
                    color: #0369A1;
                }
                .submit-button {
                    width: 100%;
                    background: #0284C7;
                    color: #fff;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .submit-button:hover {
                    background: #0369A1;
                    transform: translateY(-4px);
                }
                .submit-button.busy {
                    opacity: 0.75;
                    cursor: not-allowed;
                    transform: none;
                }
                .status-message {
                    margin-top: 1rem;
                    text-align: center;
                }
                .status-message.success {
                    color: #22c55e;
                }
                .status-message.error {
                    color: #ef4444;
                }
                @media (max-width: 768px) {
                    .form-grid {
                        grid-template-columns: 1fr;
                    }
                    .form-field.full-width {
                        grid-column: span 1;
                    }
                    .contact-container h2 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
