use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Showing,
    FadingOut,
}

impl LoadingPhase {
    pub fn class(self) -> Classes {
        match self {
            LoadingPhase::Showing => classes!("loading-screen"),
            LoadingPhase::FadingOut => classes!("loading-screen", "fade-out"),
        }
    }
}

/// What a timer expiry means for the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Fade,
    Complete,
    Ignored,
}

/// Timer-driven overlay lifecycle: show, fade, done. Once unmounted, late
/// timer callbacks have no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingGate {
    phase: LoadingPhase,
    done: bool,
    mounted: bool,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingGate {
    pub fn new() -> Self {
        Self {
            phase: LoadingPhase::Showing,
            done: false,
            mounted: true,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    /// Delay until the next timer should fire, if one is still due.
    pub fn pending_delay(&self) -> Option<u32> {
        if !self.mounted || self.done {
            return None;
        }
        match self.phase {
            LoadingPhase::Showing => Some(config::LOADING_SHOW_MS),
            LoadingPhase::FadingOut => Some(config::LOADING_FADE_MS),
        }
    }

    pub fn on_timer(&mut self) -> GateEvent {
        if !self.mounted || self.done {
            return GateEvent::Ignored;
        }
        match self.phase {
            LoadingPhase::Showing => {
                self.phase = LoadingPhase::FadingOut;
                GateEvent::Fade
            }
            LoadingPhase::FadingOut => {
                self.done = true;
                GateEvent::Complete
            }
        }
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// Fired once the fade has finished; the parent unmounts the overlay.
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let phase = use_state_eq(|| LoadingPhase::Showing);

    {
        let phase = phase.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let gate = Rc::new(RefCell::new(LoadingGate::new()));
                let fade_done: Rc<RefCell<Option<Timeout>>> = Rc::default();

                let show = gate.borrow().pending_delay().map(|delay| {
                    let gate = gate.clone();
                    let fade_slot = fade_done.clone();
                    Timeout::new(delay, move || {
                        if gate.borrow_mut().on_timer() != GateEvent::Fade {
                            return;
                        }
                        phase.set(gate.borrow().phase());
                        let Some(delay) = gate.borrow().pending_delay() else {
                            return;
                        };
                        let gate = gate.clone();
                        *fade_slot.borrow_mut() = Some(Timeout::new(delay, move || {
                            if gate.borrow_mut().on_timer() == GateEvent::Complete {
                                debug!("loading screen done");
                                on_complete.emit(());
                            }
                        }));
                    })
                });

                // Dropping a Timeout clears it, so an early unmount fires nothing.
                move || {
                    gate.borrow_mut().unmount();
                    drop(show);
                    fade_done.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class={phase.class()}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        background: #FDFDFD;
                        opacity: 1;
                        transition: opacity 0.6s ease;
                    }
                    .loading-screen.fade-out {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .loading-logo img {
                        height: 4rem;
                        animation: loadingPulse 1.2s ease-in-out infinite;
                    }
                    .loading-bar {
                        width: 160px;
                        height: 3px;
                        border-radius: 3px;
                        background: #eee;
                        overflow: hidden;
                    }
                    .loading-bar-progress {
                        height: 100%;
                        width: 100%;
                        background: #9DA352;
                        transform-origin: left;
                        animation: loadingFill 1.8s ease-out forwards;
                    }
                    @keyframes loadingFill {
                        from { transform: scaleX(0); }
                        to { transform: scaleX(1); }
                    }
                    @keyframes loadingPulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.6; }
                    }
                "#}
            </style>
            <div class="loading-logo">
                <img src="/logo.png" alt="H2 AI LAB" />
            </div>
            <div class="loading-bar">
                <div class="loading-bar-progress" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_then_fades_then_completes() {
        let mut gate = LoadingGate::new();
        assert_eq!(gate.phase(), LoadingPhase::Showing);
        assert_eq!(gate.pending_delay(), Some(1_800));

        assert_eq!(gate.on_timer(), GateEvent::Fade);
        assert_eq!(gate.phase(), LoadingPhase::FadingOut);
        assert_eq!(gate.pending_delay(), Some(600));

        assert_eq!(gate.on_timer(), GateEvent::Complete);
        assert_eq!(gate.pending_delay(), None);
    }

    #[test]
    fn completes_only_once() {
        let mut gate = LoadingGate::new();
        gate.on_timer();
        gate.on_timer();
        assert_eq!(gate.on_timer(), GateEvent::Ignored);
    }

    #[test]
    fn unmount_while_showing_cancels_everything() {
        let mut gate = LoadingGate::new();
        gate.unmount();
        assert_eq!(gate.pending_delay(), None);
        assert_eq!(gate.on_timer(), GateEvent::Ignored);
        assert_eq!(gate.phase(), LoadingPhase::Showing);
    }

    #[test]
    fn unmount_while_fading_skips_completion() {
        let mut gate = LoadingGate::new();
        assert_eq!(gate.on_timer(), GateEvent::Fade);
        gate.unmount();
        assert_eq!(gate.pending_delay(), None);
        assert_eq!(gate.on_timer(), GateEvent::Ignored);
    }

    #[test]
    fn fade_adds_class() {
        assert_eq!(LoadingPhase::Showing.class(), classes!("loading-screen"));
        assert_eq!(LoadingPhase::FadingOut.class(), classes!("loading-screen", "fade-out"));
    }
}
