use yew::prelude::*;
use yew_hooks::prelude::*;
use crate::components::{
    about::AboutSection,
    footer::Footer,
    header::Header,
    hero::Hero,
    services::ServicesSection,
    steps::StepsSection,
};
use crate::contact::form::ContactForm;
use crate::pages::faq::FaqSection;
use crate::reviews::section::ReviewsSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title("Eben AI Solutions".to_string());

    html! {
        <div id="home" class="landing-page">
            <div class="background-texture"></div>
            <Header />
            <main>
                <Hero />
                <ServicesSection />
                <AboutSection />
                <StepsSection />
                <ReviewsSection />
                <ContactForm />
                <FaqSection />
            </main>
            <Footer />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .background-texture {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    background-image: radial-gradient(#00000010 1px, transparent 1px);
                    background-size: 20px 20px;
                }
                "#}
            </style>
        </div>
    }
}
