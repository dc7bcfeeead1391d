use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Anchor id for a nav label: lowercase, spaces become hyphens.
pub fn section_id(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

/// The bits of the browser the navigator needs.
pub trait ScrollHost {
    fn element_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

pub struct WindowScroll;

impl ScrollHost for WindowScroll {
    fn element_top(&self, id: &str) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

pub fn scroll_to_top_with(host: &impl ScrollHost) {
    host.smooth_scroll_to(0.0);
}

/// Returns whether the viewport moved. A missing section is not an error.
pub fn scroll_to_section_with(host: &impl ScrollHost, id: &str) -> bool {
    scroll_to_element_with(host, id, config::HEADER_OFFSET_PX)
}

/// Brings the section's top edge flush with the viewport, ignoring the nav bar.
pub fn scroll_into_view_with(host: &impl ScrollHost, id: &str) -> bool {
    scroll_to_element_with(host, id, 0.0)
}

fn scroll_to_element_with(host: &impl ScrollHost, id: &str, header_offset: f64) -> bool {
    match host.element_top(id) {
        Some(top) => {
            host.smooth_scroll_to(top - header_offset);
            true
        }
        None => {
            debug!("no section with id '{}', not scrolling", id);
            false
        }
    }
}

pub fn scroll_to_top() {
    scroll_to_top_with(&WindowScroll);
}

pub fn scroll_to_section(id: &str) -> bool {
    scroll_to_section_with(&WindowScroll, id)
}

pub fn scroll_into_view(id: &str) -> bool {
    scroll_into_view_with(&WindowScroll, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakePage {
        sections: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl ScrollHost for FakePage {
        fn element_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn nav_labels_map_to_anchor_ids() {
        assert_eq!(section_id("Problem"), "problem");
        assert_eq!(section_id("H2 System"), "h2-system");
        assert_eq!(section_id("How It Works"), "how-it-works");
    }

    #[test]
    fn section_scroll_accounts_for_header() {
        let mut page = FakePage::default();
        page.sections.insert("privacy", 2_400.0);

        assert!(scroll_to_section_with(&page, "privacy"));
        assert_eq!(*page.scrolls.borrow(), vec![2_320.0]);
    }

    #[test]
    fn into_view_lands_on_section_top() {
        let mut page = FakePage::default();
        page.sections.insert("problem", 900.0);

        assert!(scroll_into_view_with(&page, "problem"));
        assert!(!scroll_into_view_with(&page, "nowhere"));
        assert_eq!(*page.scrolls.borrow(), vec![900.0]);
    }

    #[test]
    fn missing_section_does_not_move() {
        let page = FakePage::default();

        assert!(!scroll_to_section_with(&page, "nowhere"));
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn top_goes_to_zero() {
        let page = FakePage::default();
        scroll_to_top_with(&page);
        assert_eq!(*page.scrolls.borrow(), vec![0.0]);
    }
}
