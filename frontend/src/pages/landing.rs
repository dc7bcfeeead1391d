use log::info;
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::loading::LoadingScreen;
use crate::components::nav::Nav;
use crate::pages::sections::{Footer, Hero, HowItWorks, Privacy, Problem, SystemOverview};
use crate::viewport::ViewportProvider;

#[function_component(Landing)]
pub fn landing() -> Html {
    let loading = use_state(|| true);

    let on_loaded = {
        let loading = loading.clone();
        Callback::from(move |_| {
            info!("loading screen finished");
            loading.set(false);
        })
    };

    html! {
        <ViewportProvider>
            <div class="landing">
                <style>{ PAGE_STYLES }</style>
                if *loading {
                    <LoadingScreen on_complete={on_loaded} />
                }
                <Nav />
                <Hero />
                <Problem />
                <SystemOverview />
                <Privacy />
                <HowItWorks />
                <ContactSection />
                <Footer />
            </div>
        </ViewportProvider>
    }
}

const PAGE_STYLES: &str = r#"
    .landing {
        min-height: 100vh;
        background: #FDFDFD;
        color: #0f172a;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing ::selection {
        background: rgba(157, 163, 82, 0.2);
    }
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.9s ease, transform 0.9s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .logo {
        height: 2.25rem;
        object-fit: contain;
    }
    .logo.footer {
        height: 2.5rem;
    }
    .logo-text {
        display: flex;
        align-items: center;
        font-size: 1.5rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        color: #9DA352;
    }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 2rem;
        text-align: center;
    }
    .animated-gradient {
        background: linear-gradient(120deg, #FDFDFD, #f3f4e6, #FDFDFD);
        background-size: 300% 300%;
        animation: gradientShift 12s ease infinite;
    }
    @keyframes gradientShift {
        0%, 100% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
    }
    .hero-title {
        font-size: clamp(4.5rem, 12vw, 9rem);
        font-weight: 900;
        letter-spacing: -0.06em;
        line-height: 0.85;
        margin-bottom: 2rem;
    }
    .hero-quote {
        max-width: 48rem;
        margin: 0 auto 3rem;
        font-size: 1.5rem;
        font-style: italic;
        font-weight: 500;
        line-height: 1.6;
        color: #64748b;
    }
    .pill-button {
        border: none;
        border-radius: 9999px;
        color: #fff;
        cursor: pointer;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        transition: transform 0.2s, filter 0.2s;
    }
    .pill-button.large {
        padding: 1.5rem 3rem;
        font-size: 1.125rem;
        font-weight: 900;
    }
    .pill-button:hover {
        filter: brightness(1.1);
        transform: scale(1.05);
    }
    .pill-button:active {
        transform: scale(0.95);
    }
    .scroll-indicator {
        position: absolute;
        bottom: 3rem;
        left: 50%;
        cursor: pointer;
        animation: bounce 2s infinite;
    }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }
    .section {
        padding: 8rem 0;
    }
    .section-white {
        background: #fff;
    }
    .section-muted {
        background: #f8fafc;
    }
    .section-dark {
        margin: 0 2rem;
        border-radius: 4rem;
        background: #0f172a;
        color: #fff;
    }
    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .section-inner.narrow {
        max-width: 64rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 5rem;
    }
    .section-title {
        font-size: 3.75rem;
        font-weight: 900;
        letter-spacing: -0.05em;
        line-height: 1.1;
        margin-bottom: 1rem;
    }
    .section-lead {
        font-size: 1.25rem;
        line-height: 1.6;
        color: #64748b;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }
    .section-kicker {
        font-size: 0.875rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        color: #94a3b8;
    }
    .card-hover {
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .card-hover:hover {
        transform: translateY(-6px);
        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08);
    }
    .problem-grid {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .stat-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        margin-bottom: 2.5rem;
    }
    .stat-card {
        padding: 2rem;
        border-radius: 2rem;
        border: 1px solid #f1f5f9;
        background: #f8fafc;
        text-align: center;
    }
    .counter-number {
        font-size: 4.5rem;
        font-weight: 900;
        margin-bottom: 1rem;
        font-variant-numeric: tabular-nums;
    }
    .stat-label {
        font-size: 0.75rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: #94a3b8;
    }
    .text-link {
        background: none;
        border: none;
        padding: 0;
        cursor: pointer;
        font-size: 0.875rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.1em;
    }
    .product-image-container {
        border-radius: 3rem;
        overflow: hidden;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .product-image-container img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        display: block;
    }
    .system-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .system-card {
        padding: 2rem;
        border-radius: 2.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
    }
    .system-card.featured {
        border-width: 2px;
        transform: translateY(-1rem);
    }
    .system-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .system-card p {
        color: #94a3b8;
        line-height: 1.6;
    }
    .product-image-wrapper {
        height: 12rem;
        margin-bottom: 1.5rem;
        border-radius: 1rem;
        overflow: hidden;
    }
    .product-image-wrapper img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        padding: 1rem;
        box-sizing: border-box;
    }
    .pulse-glow {
        animation: pulseGlow 3s ease-in-out infinite;
    }
    @keyframes pulseGlow {
        0%, 100% { box-shadow: 0 0 0 rgba(157, 163, 82, 0); }
        50% { box-shadow: 0 0 40px rgba(157, 163, 82, 0.35); }
    }
    .float-animation {
        animation: float 4s ease-in-out infinite;
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    .privacy-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .privacy-card {
        padding: 2rem;
        border-radius: 2rem;
        border: 1px solid #f1f5f9;
        background: #f8fafc;
        text-align: center;
    }
    .privacy-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .privacy-card p {
        font-size: 0.875rem;
        line-height: 1.6;
        color: #64748b;
    }
    .privacy-icon {
        display: flex;
        justify-content: center;
        margin-bottom: 1.5rem;
    }
    .steps {
        display: flex;
        flex-direction: column;
        gap: 3rem;
    }
    .step {
        display: flex;
        gap: 2rem;
        align-items: flex-start;
    }
    .step-number {
        font-size: 3.75rem;
        font-weight: 900;
        opacity: 0.2;
    }
    .step-body {
        flex: 1;
        padding-top: 0.5rem;
    }
    .step-body h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .step-body p {
        font-size: 1.125rem;
        line-height: 1.6;
        color: #475569;
    }
    .site-footer {
        padding: 5rem 0;
        text-align: center;
        border-top: 1px solid #f1f5f9;
    }
    .footer-logo {
        display: flex;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .site-footer p {
        font-size: 10px;
        font-weight: 900;
        letter-spacing: 0.5em;
        text-transform: uppercase;
        color: #cbd5e1;
    }
    @media (max-width: 1024px) {
        .problem-grid,
        .privacy-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    @media (max-width: 768px) {
        .problem-grid,
        .system-grid,
        .privacy-grid {
            grid-template-columns: 1fr;
        }
        .system-card.featured {
            transform: none;
        }
        .section-dark {
            margin: 0 1rem;
        }
        .section-title {
            font-size: 3rem;
        }
    }
"#;
