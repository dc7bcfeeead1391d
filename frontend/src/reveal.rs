use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::viewport::RevealDispatcher;

/// One-shot visibility: `Pending` may become `Triggered`, never the reverse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Triggered,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        matches!(self, RevealState::Triggered)
    }
}

impl Reducible for RevealState {
    /// Whether the observed element currently intersects the viewport.
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        match *self {
            RevealState::Pending if intersecting => Rc::new(RevealState::Triggered),
            _ => self,
        }
    }
}

pub struct Reveal {
    pub node: NodeRef,
    pub visible: bool,
}

impl Reveal {
    /// `reveal` plus `visible` once triggered, on top of the caller's own classes.
    pub fn classes(&self, base: &'static str) -> Classes {
        classes!(base, "reveal", self.visible.then_some("visible"))
    }
}

#[hook]
pub fn use_scroll_reveal() -> Reveal {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);
    let reveals = use_context::<RevealDispatcher>();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watched = match (node.cast::<Element>(), reveals) {
                    (Some(element), Some(reveals)) => {
                        let on_change = {
                            let dispatcher = dispatcher.clone();
                            Callback::from(move |intersecting: bool| dispatcher.dispatch(intersecting))
                        };
                        if reveals.watch(&element, on_change) {
                            Some((reveals, element))
                        } else {
                            dispatcher.dispatch(true);
                            None
                        }
                    }
                    // Nothing to observe with: never leave content hidden.
                    _ => {
                        dispatcher.dispatch(true);
                        None
                    }
                };

                move || {
                    if let Some((reveals, element)) = watched {
                        reveals.unwatch(&element);
                    }
                }
            },
            node.clone(),
        );
    }

    Reveal {
        node,
        visible: state.is_visible(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(events: &[bool]) -> Vec<bool> {
        let mut state = Rc::new(RevealState::default());
        let mut seen = Vec::new();
        for &intersecting in events {
            state = state.reduce(intersecting);
            seen.push(state.is_visible());
        }
        seen
    }

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::default().is_visible());
    }

    #[test]
    fn stays_pending_until_intersection() {
        assert_eq!(feed(&[false, false]), vec![false, false]);
    }

    #[test]
    fn never_reverts_once_triggered() {
        let seen = feed(&[false, true, false, true, false]);
        assert_eq!(seen, vec![false, true, true, true, true]);
    }

    #[test]
    fn triggered_state_is_reused() {
        let triggered = Rc::new(RevealState::Triggered);
        let next = triggered.clone().reduce(false);
        assert!(Rc::ptr_eq(&triggered, &next));
    }
}
