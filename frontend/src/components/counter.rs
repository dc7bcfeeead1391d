use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config;
use crate::reveal::use_scroll_reveal;

/// Count-up from zero to `end`, as a function of elapsed time only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    pub end: u64,
    pub duration_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub displayed: u64,
    pub finished: bool,
}

impl CounterAnimation {
    pub fn new(end: u64, duration_ms: u32) -> Self {
        Self {
            end,
            duration_ms: f64::from(duration_ms),
        }
    }

    /// Fraction of the animation done after `elapsed_ms`, clamped to 0..=1.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn frame(&self, elapsed_ms: f64) -> Frame {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return Frame {
                displayed: self.end,
                finished: true,
            };
        }
        let displayed = ((progress * self.end as f64).floor() as u64).min(self.end);
        Frame {
            displayed,
            finished: false,
        }
    }

    pub fn tick(&self, started_at: f64, now: f64) -> Frame {
        self.frame(now - started_at)
    }

    /// The animation to run, or `None` while the counter is still off screen.
    pub fn when_revealed(visible: bool, end: u64, duration_ms: u32) -> Option<Self> {
        visible.then(|| Self::new(end, duration_ms))
    }
}

/// Thousands separated with commas, e.g. `982000` -> `982,000`.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Browser locale grouping, like `Number.prototype.toLocaleString`.
#[cfg(target_arch = "wasm32")]
pub fn display_number(value: u64) -> String {
    String::from(web_sys::js_sys::Number::from(value as f64).to_locale_string("default"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn display_number(value: u64) -> String {
    format_grouped(value)
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A running requestAnimationFrame loop. Dropping it cancels the pending frame.
struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    fn start(animation: CounterAnimation, on_frame: Callback<u64>) -> Option<Self> {
        let window = web_sys::window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::default();
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::default();

        let mut started_at: Option<f64> = None;
        let on_frame_inner = on_frame.clone();
        let next = callback.clone();
        let pending_inner = pending.clone();
        let window_inner = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            let start = *started_at.get_or_insert(now);
            let frame = animation.tick(start, now);
            on_frame_inner.emit(frame.displayed);

            pending_inner.set(None);
            if frame.finished {
                return;
            }
            if let Some(cb) = next.borrow().as_ref() {
                match window_inner.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_inner.set(Some(id)),
                    Err(err) => warn!("could not schedule counter frame: {:?}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => {
                pending.set(Some(id));
                Some(Self {
                    window,
                    pending,
                    callback,
                })
            }
            _ => {
                // Break the closure's self reference before giving up.
                callback.borrow_mut().take();
                on_frame.emit(animation.end);
                None
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let reveal = use_scroll_reveal();
    let displayed = use_state_eq(|| 0u64);

    {
        let displayed = displayed.clone();
        use_effect_with_deps(
            move |&(visible, end, duration_ms)| {
                let frames = CounterAnimation::when_revealed(visible, end, duration_ms).and_then(|animation| {
                    FrameLoop::start(animation, Callback::from(move |value| displayed.set(value)))
                });
                move || drop(frames)
            },
            (reveal.visible, props.end, props.duration_ms),
        );
    }

    html! {
        <div ref={reveal.node.clone()} class="counter-number" style={format!("color: {};", config::BRAND_GREEN)}>
            { format!("{}{}", display_number(*displayed), props.suffix) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let animation = CounterAnimation::new(982, 2_000);
        assert_eq!(animation.frame(0.0), Frame { displayed: 0, finished: false });
    }

    #[test]
    fn floors_partial_progress() {
        let animation = CounterAnimation::new(60, 2_000);
        assert_eq!(animation.frame(1_000.0).displayed, 30);
        assert_eq!(animation.frame(1_010.0).displayed, 30);
        assert_eq!(animation.tick(500.0, 1_500.0).displayed, 30);
    }

    #[test]
    fn settles_on_end_at_and_after_duration() {
        for end in [0u64, 1, 60, 982, 1_000_000] {
            let animation = CounterAnimation::new(end, 2_000);
            for elapsed in [2_000.0, 2_001.0, 10_000.0] {
                assert_eq!(animation.frame(elapsed), Frame { displayed: end, finished: true });
            }
        }
    }

    #[test]
    fn never_decreases_or_overshoots() {
        for end in [0u64, 7, 60, 982, 123_457] {
            let animation = CounterAnimation::new(end, 2_000);
            let mut last = 0;
            for step in 0..=250 {
                let shown = animation.frame(f64::from(step) * 10.0).displayed;
                assert!(shown >= last, "end={end} step={step}");
                assert!(shown <= end);
                last = shown;
            }
            assert_eq!(last, end);
        }
    }

    #[test]
    fn holds_at_zero_until_revealed() {
        assert_eq!(CounterAnimation::when_revealed(false, 982, 2_000), None);
        assert_eq!(
            CounterAnimation::when_revealed(true, 982, 2_000),
            Some(CounterAnimation::new(982, 2_000))
        );
    }

    #[test]
    fn fine_grained_frames_never_decrease() {
        let animation = CounterAnimation::new(982, 2_000);
        let mut last = 0;
        let mut elapsed = 0.0;
        while elapsed < 2_100.0 {
            let shown = animation.frame(elapsed).displayed;
            assert!(shown >= last && shown <= 982, "elapsed={elapsed}");
            last = shown;
            elapsed += 0.37;
        }
        assert_eq!(last, 982);
    }

    #[test]
    fn native_display_falls_back_to_grouping() {
        assert_eq!(display_number(982_000), "982,000");
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let animation = CounterAnimation::new(60, 0);
        assert_eq!(animation.frame(0.0), Frame { displayed: 60, finished: true });
    }

    #[test]
    fn clock_skew_is_clamped() {
        let animation = CounterAnimation::new(60, 2_000);
        assert_eq!(animation.frame(-16.0).displayed, 0);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(982), "982");
        assert_eq!(format_grouped(1_000), "1,000");
        assert_eq!(format_grouped(982_000), "982,000");
        assert_eq!(format_grouped(12_345_678), "12,345,678");
    }
}
