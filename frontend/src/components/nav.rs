use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config::BRAND_GREEN;
use crate::content::NAV_ITEMS;
use crate::navigation::{scroll_to_section, scroll_to_top, section_id};
use crate::viewport::ScrollState;

/// Click handler that scrolls to the section with the given id.
pub fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(id);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let scrolled = use_context::<ScrollState>()
        .map(|state| state.scrolled)
        .unwrap_or(false);

    let to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <nav class={classes!("top-nav", scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 2rem 0;
                        background: transparent;
                        transition: all 0.5s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid #f1f5f9;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo-button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0;
                    }
                    .nav-logo-button .logo {
                        height: 2.25rem;
                        object-fit: contain;
                    }
                    .nav-links {
                        display: flex;
                        gap: 3rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        font-size: 13px;
                        letter-spacing: 0.2em;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #64748b;
                        font: inherit;
                        letter-spacing: inherit;
                        text-transform: inherit;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #000;
                    }
                    .nav-cta {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        cursor: pointer;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        transition: transform 0.2s;
                    }
                    .nav-cta:hover {
                        transform: scale(1.05);
                    }
                    @media (max-width: 1024px) {
                        .nav-links {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo-button" onclick={to_top}>
                    <Logo />
                </button>
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|label| {
                        let id = section_id(label);
                        let onclick = Callback::from(move |_: MouseEvent| {
                            scroll_to_section(&id);
                        });
                        html! {
                            <button key={*label} class="nav-link" {onclick}>{*label}</button>
                        }
                    }) }
                </div>
                <button class="nav-cta" style={format!("background-color: {};", BRAND_GREEN)} onclick={scroll_to("contact")}>
                    {"Join Pilot"}
                </button>
            </div>
        </nav>
    }
}
