// =============================================================================
// Contact Site - Home Page
// =============================================================================
// Single page: hero greeting, about, services, contact form + results.
// =============================================================================

use leptos::prelude::*;
use crate::components::{ContactSection, Footer, NavBar, ResultPanel};
use crate::config::SiteConfig;

/// The whole site.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <div class="page page-home">
            <NavBar />

            // ═══════════════════════════════════════════════════════════════
            // HERO - greeting is filled in once the visitor answers the prompt
            // ═══════════════════════════════════════════════════════════════
            <section id="home" class="hero">
                <h1 class="hero-headline">
                    "Hello, "
                    <span id=config.ids.greeting.clone() class="user-name">{config.default_name.clone()}</span>
                    "!"
                </h1>
                <p class="hero-description">"Welcome to our website. Have a look around and get in touch."</p>
                <a href="#contact" class="btn btn-primary">"Contact Us"</a>
            </section>

            <section id="about" class="section section-about">
                <h2 class="section-title">"About Us"</h2>
                <p>
                    "We are a small team building fast, reliable websites. "
                    "Every page we ship is tested, accessible and quick to load."
                </p>
            </section>

            <section id="services" class="section section-services">
                <h2 class="section-title">"Services"</h2>
                <div class="service-grid">
                    <div class="service-card">
                        <h3>"Web Design"</h3>
                        <p>"Clean layouts that work on every screen size."</p>
                    </div>
                    <div class="service-card">
                        <h3>"Development"</h3>
                        <p>"Front ends written in Rust and compiled to WebAssembly."</p>
                    </div>
                    <div class="service-card">
                        <h3>"Support"</h3>
                        <p>"Help when you need it, from launch onwards."</p>
                    </div>
                </div>
            </section>

            <section id="contact" class="section section-contact">
                <h2 class="section-title">"Contact Us"</h2>
                <ContactSection />
                <ResultPanel />
            </section>

            <Footer />
        </div>
    }
}
