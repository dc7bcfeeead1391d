use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLLED_THRESHOLD_PX
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether the page has been scrolled past the nav bar threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled: bool,
}

/// Elements waiting for their first intersection, with their listeners.
pub struct WatchList<E> {
    watchers: Vec<(E, Callback<bool>)>,
}

impl<E> Default for WatchList<E> {
    fn default() -> Self {
        Self { watchers: Vec::new() }
    }
}

impl<E: PartialEq> WatchList<E> {
    pub fn watch(&mut self, element: E, on_change: Callback<bool>) {
        self.watchers.push((element, on_change));
    }

    pub fn unwatch(&mut self, element: &E) {
        self.watchers.retain(|(watched, _)| watched != element);
    }

    /// Listeners to notify for `target`. An intersecting element is dropped
    /// from the list, so it is reported at most once.
    pub fn notify(&mut self, target: &E, intersecting: bool) -> Vec<Callback<bool>> {
        let listeners = self
            .watchers
            .iter()
            .filter(|(watched, _)| watched == target)
            .map(|(_, on_change)| on_change.clone())
            .collect();
        if intersecting {
            self.unwatch(target);
        }
        listeners
    }
}

struct SharedObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for SharedObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One IntersectionObserver shared by every revealed element on the page.
/// Elements are unobserved as soon as they first intersect.
#[derive(Clone)]
pub struct RevealDispatcher {
    watchers: Rc<RefCell<WatchList<Element>>>,
    shared: Option<Rc<SharedObserver>>,
}

impl PartialEq for RevealDispatcher {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.watchers, &other.watchers)
    }
}

impl RevealDispatcher {
    pub fn new() -> Self {
        let watchers: Rc<RefCell<WatchList<Element>>> = Rc::default();
        let shared = match Self::create_observer(watchers.clone()) {
            Ok(shared) => Some(Rc::new(shared)),
            Err(err) => {
                warn!("IntersectionObserver unavailable, revealing eagerly: {:?}", err);
                None
            }
        };
        Self { watchers, shared }
    }

    fn create_observer(watchers: Rc<RefCell<WatchList<Element>>>) -> Result<SharedObserver, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let intersecting = entry.is_intersecting();
                let target = entry.target();

                // Collect first so no borrow is held while components re-render.
                let listeners = watchers.borrow_mut().notify(&target, intersecting);
                if intersecting {
                    observer.unobserve(&target);
                }

                for listener in listeners {
                    listener.emit(intersecting);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        init.set_root_margin(config::REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(SharedObserver { observer, _callback: callback })
    }

    /// Starts observing `element`. Returns false when the host cannot observe,
    /// in which case the caller should reveal right away.
    pub fn watch(&self, element: &Element, on_change: Callback<bool>) -> bool {
        let Some(shared) = &self.shared else {
            return false;
        };
        self.watchers.borrow_mut().watch(element.clone(), on_change);
        shared.observer.observe(element);
        true
    }

    pub fn unwatch(&self, element: &Element) {
        self.watchers.borrow_mut().unwatch(element);
        if let Some(shared) = &self.shared {
            shared.observer.unobserve(element);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's only scroll listener and intersection observer and hands
/// both out through context.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let scroll = use_state_eq(|| ScrollState {
        scrolled: is_scrolled(current_scroll_y()),
    });
    let reveals = use_memo(|_| RevealDispatcher::new(), ());

    {
        let scroll = scroll.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scrolled = is_scrolled(current_scroll_y());
            if scrolled != scroll.scrolled {
                debug!("nav bar scrolled state -> {}", scrolled);
            }
            scroll.set(ScrollState { scrolled });
        });
    }

    html! {
        <ContextProvider<RevealDispatcher> context={(*reveals).clone()}>
            <ContextProvider<ScrollState> context={*scroll}>
                { props.children.clone() }
            </ContextProvider<ScrollState>>
        </ContextProvider<RevealDispatcher>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<Cell<Option<bool>>>, Callback<bool>) {
        let seen: Rc<Cell<Option<bool>>> = Rc::default();
        let sink = seen.clone();
        (seen, Callback::from(move |intersecting| sink.set(Some(intersecting))))
    }

    #[test]
    fn first_intersection_stops_watching() {
        let mut list = WatchList::default();
        let (seen, on_change) = recorder();
        list.watch("hero", on_change);

        for listener in list.notify(&"hero", true) {
            listener.emit(true);
        }
        assert_eq!(seen.get(), Some(true));
        assert!(list.notify(&"hero", false).is_empty());
        assert!(list.notify(&"hero", true).is_empty());
    }

    #[test]
    fn non_intersecting_entries_keep_watching() {
        let mut list = WatchList::default();
        let (_seen, on_change) = recorder();
        list.watch("problem", on_change);

        assert_eq!(list.notify(&"problem", false).len(), 1);
        assert_eq!(list.notify(&"problem", true).len(), 1);
    }

    #[test]
    fn unwatch_drops_only_that_element() {
        let mut list = WatchList::default();
        let (_a, first) = recorder();
        let (_b, second) = recorder();
        list.watch("privacy", first);
        list.watch("contact", second);

        list.unwatch(&"privacy");
        assert!(list.notify(&"privacy", true).is_empty());
        assert_eq!(list.notify(&"contact", true).len(), 1);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(30.0));
        assert!(is_scrolled(30.5));
        assert!(is_scrolled(1_200.0));
    }
}
