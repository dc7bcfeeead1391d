use yew::prelude::*;

use crate::config::BRAND_GREEN;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivacyIcon {
    Local,
    NoCloud,
    Consent,
    Minimal,
}

impl PrivacyIcon {
    pub fn render(self) -> Html {
        let paths = match self {
            PrivacyIcon::Local => html! {
                <>
                    <rect x="2" y="7" width="20" height="14" rx="2" />
                    <path d="M12 11v4" />
                    <circle cx="12" cy="16" r="1" />
                </>
            },
            PrivacyIcon::NoCloud => html! {
                <>
                    <path d="M18 10a4 4 0 0 0-4-4 4 4 0 0 0-8 2 3 3 0 0 0 0 6h10a4 4 0 0 0 0-8" />
                    <line x1="4" y1="4" x2="20" y2="20" />
                </>
            },
            PrivacyIcon::Consent => html! {
                <>
                    <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
                    <path d="M9 12l2 2 4-4" />
                </>
            },
            PrivacyIcon::Minimal => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 6v6l4 2" />
                </>
            },
        };

        html! {
            <svg width="40" height="40" viewBox="0 0 24 24" fill="none" stroke={BRAND_GREEN} stroke-width="1.5">
                { paths }
            </svg>
        }
    }
}

/// Down arrow used by the hero's scroll hint.
pub fn arrow_down() -> Html {
    html! {
        <svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke={BRAND_GREEN} stroke-width="2">
            <path d="M12 5v14M5 12l7 7 7-7" />
        </svg>
    }
}
