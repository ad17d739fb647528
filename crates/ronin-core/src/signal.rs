//! Scroll-progress and pointer signals.
//!
//! [`Signals`] is the single owner of both values. Event callbacks only ever
//! hold a [`SignalHandle`], a weak reference that stops writing as soon as the
//! owner is dropped, so a torn-down hero cannot be mutated by late input.

use crate::constants::{POINTER_REST, SCRUB_SECONDS, SCRUB_SETTLE_EPSILON, SCRUB_TIME_CONSTANTS};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Clamp to [0, 1]; NaN maps to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Normalized pointer position relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSignal(pub Vec2);

impl Default for PointerSignal {
    fn default() -> Self {
        Self(Vec2::new(POINTER_REST[0], POINTER_REST[1]))
    }
}

impl PointerSignal {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Normalize client coordinates by the viewport size. A collapsed viewport
    /// yields the resting position.
    pub fn from_client(client_x: f64, client_y: f64, viewport: Vec2) -> Self {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Self::default();
        }
        Self::new(client_x as f32 / viewport.x, client_y as f32 / viewport.y)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn clamped(&self) -> Self {
        Self::new(clamp_unit(self.0.x), clamp_unit(self.0.y))
    }
}

/// Raw scroll fraction of a tall region, "top top" to "bottom bottom".
///
/// `rect_top` is the region's top edge relative to the viewport (negative once
/// scrolled past), `rect_height` its full height.
pub fn scroll_fraction(rect_top: f32, rect_height: f32, viewport_height: f32) -> f32 {
    let travel = rect_height - viewport_height;
    if travel <= 0.0 || !travel.is_finite() {
        return if rect_top <= 0.0 { 1.0 } else { 0.0 };
    }
    clamp_unit(-rect_top / travel)
}

/// Damped follow of the raw scroll fraction.
///
/// The emitted value approaches the target exponentially and covers ~95% of
/// any jump within `smoothing_sec`. Zero smoothing follows 1:1.
#[derive(Clone, Debug)]
pub struct ScrollScrub {
    value: f32,
    target: f32,
    smoothing_sec: f32,
    primed: bool,
}

impl Default for ScrollScrub {
    fn default() -> Self {
        Self::new(SCRUB_SECONDS)
    }
}

impl ScrollScrub {
    pub fn new(smoothing_sec: f32) -> Self {
        Self {
            value: 0.0,
            target: 0.0,
            smoothing_sec: smoothing_sec.max(0.0),
            primed: false,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set the raw fraction to follow. The first sample after mount is taken
    /// as-is so a reload mid-page does not sweep through the whole animation.
    pub fn set_target(&mut self, raw: f32) {
        self.target = clamp_unit(raw);
        if !self.primed {
            self.value = self.target;
            self.primed = true;
        }
    }

    /// Advance by `dt_sec`; returns whether the emitted value moved.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let before = self.value;
        if self.smoothing_sec <= 0.0 {
            self.value = self.target;
        } else {
            let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
            let tau = self.smoothing_sec / SCRUB_TIME_CONSTANTS;
            let alpha = 1.0 - (-dt / tau).exp();
            self.value += (self.target - self.value) * alpha;
            if (self.target - self.value).abs() < SCRUB_SETTLE_EPSILON {
                self.value = self.target;
            }
        }
        self.value != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalSnapshot {
    pub progress: f32,
    pub pointer: PointerSignal,
}

#[derive(Debug, Default)]
struct SignalState {
    pointer: PointerSignal,
    scrub: ScrollScrub,
    writes: u64,
}

/// Owner of the two input signals for one mounted hero.
#[derive(Debug)]
pub struct Signals {
    state: Rc<RefCell<SignalState>>,
}

impl Signals {
    pub fn mount(smoothing_sec: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState {
                pointer: PointerSignal::default(),
                scrub: ScrollScrub::new(smoothing_sec),
                writes: 0,
            })),
        }
    }

    /// Weak handle for event callbacks.
    pub fn handle(&self) -> SignalHandle {
        SignalHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Advance scroll smoothing and read both signals for this frame.
    pub fn tick(&self, dt_sec: f32) -> SignalSnapshot {
        let mut st = self.state.borrow_mut();
        st.scrub.step(dt_sec);
        SignalSnapshot {
            progress: st.scrub.value(),
            pointer: st.pointer,
        }
    }

    pub fn snapshot(&self) -> SignalSnapshot {
        let st = self.state.borrow();
        SignalSnapshot {
            progress: st.scrub.value(),
            pointer: st.pointer,
        }
    }

    /// Number of input writes accepted through handles.
    pub fn writes(&self) -> u64 {
        self.state.borrow().writes
    }
}

/// Write side of [`Signals`] held by event listeners.
#[derive(Clone, Debug)]
pub struct SignalHandle {
    state: Weak<RefCell<SignalState>>,
}

impl SignalHandle {
    #[inline]
    pub fn is_live(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// Record a pointer move. Returns `false` once the owner is gone.
    pub fn pointer_moved(&self, client_x: f64, client_y: f64, viewport: Vec2) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let mut st = state.borrow_mut();
        st.pointer = PointerSignal::from_client(client_x, client_y, viewport);
        st.writes += 1;
        true
    }

    /// Record the scroll region geometry. Returns `false` once the owner is gone.
    pub fn scrolled(&self, rect_top: f32, rect_height: f32, viewport_height: f32) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let mut st = state.borrow_mut();
        st.scrub
            .set_target(scroll_fraction(rect_top, rect_height, viewport_height));
        st.writes += 1;
        true
    }
}
