use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(AttrValue::Static("logo"))]
    pub class: AttrValue,
}

/// Classes for the logo; the text fallback also gets `logo-text`.
pub fn logo_classes(class: &str, text_fallback: bool) -> Classes {
    classes!(class.to_string(), text_fallback.then_some("logo-text"))
}

/// Brand logo; falls back to the wordmark as text if the image does not load.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let failed = use_state(|| false);

    if *failed {
        return html! {
            <span class={logo_classes(&props.class, true)}>{"H2 AI LAB"}</span>
        };
    }

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <img src="/logo.png" alt="H2 AI LAB" class={logo_classes(&props.class, false)} {onerror} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_keeps_caller_classes() {
        assert_eq!(logo_classes("logo footer", false), classes!("logo", "footer"));
    }

    #[test]
    fn text_fallback_adds_marker_class() {
        assert_eq!(logo_classes("logo", true), classes!("logo", "logo-text"));
    }
}
