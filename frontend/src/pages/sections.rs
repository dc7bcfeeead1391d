use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::icons::arrow_down;
use crate::components::logo::Logo;
use crate::components::nav::scroll_to;
use crate::config::BRAND_GREEN;
use crate::content::{PRIVACY_POINTS, STATS, STEPS, SYSTEM_PARTS};
use crate::navigation::scroll_into_view;
use crate::reveal::use_scroll_reveal;

#[function_component(Hero)]
pub fn hero() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <header class="hero animated-gradient">
            <div ref={reveal.node.clone()} class={reveal.classes("hero-content")}>
                <h1 class="hero-title">
                    {"Safety without "}<br />
                    <span style={format!("color: {};", BRAND_GREEN)}>{"compromise."}</span>
                </h1>
                <p class="hero-quote">
                    {"\"Empowering independence through proactive AI protection.\""}
                </p>
                <button class="pill-button large" style={format!("background-color: {};", BRAND_GREEN)} onclick={scroll_to("contact")}>
                    {"Apply for Pilot 2026"}
                </button>
            </div>
            <div class="scroll-indicator" onclick={Callback::from(|_: MouseEvent| {
                scroll_into_view("problem");
            })}>
                { arrow_down() }
            </div>
        </header>
    }
}

#[function_component(Problem)]
pub fn problem() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="problem" class="section section-white">
            <div ref={reveal.node.clone()} class={reveal.classes("problem-grid")}>
                <div>
                    <h2 class="section-title">{"The Wandering Challenge"}</h2>
                    <p class="section-lead">
                        {"60% of people with dementia will experience a wandering incident. We provide the technology to prevent it."}
                    </p>
                    <div class="stat-grid">
                        { for STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="stat-card card-hover">
                                <AnimatedCounter end={stat.end} suffix={stat.suffix} />
                                <p class="stat-label">{stat.label}</p>
                            </div>
                        }) }
                    </div>
                    <button class="text-link" style={format!("color: {};", BRAND_GREEN)} onclick={scroll_to("h2-system")}>
                        {"Explore Our Solution →"}
                    </button>
                </div>
                <div class="product-image-container">
                    <img src="/product.png" alt="H2 Complete System" />
                </div>
            </div>
        </section>
    }
}

#[function_component(SystemOverview)]
pub fn system_overview() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="h2-system" class="section section-dark">
            <div ref={reveal.node.clone()} class={reveal.classes("section-inner")}>
                <div class="section-heading">
                    <h2 class="section-title">{"The H2 System"}</h2>
                    <p class="section-kicker">{"Three Components. Total Protection."}</p>
                </div>
                <div class="system-grid">
                    { for SYSTEM_PARTS.iter().map(|part| {
                        let (card_class, card_style, title_style) = if part.featured {
                            ("system-card featured pulse-glow", format!("border-color: {};", BRAND_GREEN), format!("color: {};", BRAND_GREEN))
                        } else {
                            ("system-card card-hover", String::new(), String::new())
                        };
                        html! {
                            <div key={part.title} class={card_class} style={card_style}>
                                <div class="product-image-wrapper">
                                    <img
                                        src={part.image}
                                        alt={part.alt}
                                        class={classes!(part.featured.then_some("float-animation"))}
                                    />
                                </div>
                                <h3 style={title_style}>{part.title}</h3>
                                <p>{part.description}</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="privacy" class="section section-white">
            <div ref={reveal.node.clone()} class={reveal.classes("section-inner")}>
                <div class="section-heading">
                    <h2 class="section-title">{"Privacy First"}</h2>
                    <p class="section-lead">{"Your data stays where it belongs — in your home."}</p>
                </div>
                <div class="privacy-grid">
                    { for PRIVACY_POINTS.iter().map(|point| html! {
                        <div key={point.title} class="privacy-card card-hover">
                            <div class="privacy-icon">{ point.icon.render() }</div>
                            <h3>{point.title}</h3>
                            <p>{point.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="how-it-works" class="section section-muted">
            <div ref={reveal.node.clone()} class={reveal.classes("section-inner narrow")}>
                <div class="section-heading">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <p class="section-lead">{"Three steps to complete protection"}</p>
                </div>
                <div class="steps">
                    { for STEPS.iter().map(|step| html! {
                        <div key={step.number} class="step">
                            <div class="step-number" style={format!("color: {};", step.color)}>{step.number}</div>
                            <div class="step-body">
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-logo">
                <Logo class="logo footer" />
            </div>
            <p>{"© 2026 H2 AI LAB."}</p>
        </footer>
    }
}
