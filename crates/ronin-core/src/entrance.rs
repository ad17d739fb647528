//! Entrance reveals for text blocks and staggered spec cards.
//!
//! Each trigger watches one element's top edge against a line at a fixed
//! fraction of the observer root's height. The browser observer and the
//! trigger must agree on that line, so the root margin comes from
//! [`trigger_root_margin`] and crossings are fed in with
//! [`EntranceTrigger::cross`]. Crossing the line on the way down plays the
//! reveal; crossing back up reverses it (`play none none reverse`). Leaving
//! through the top of the viewport does nothing.

use crate::constants::*;
use crate::scene::num;
use crate::signal::clamp_unit;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Quartic ease-out.
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp_unit(t);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Visual state of a revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_x_px: f32,
    pub translate_y_px: f32,
    pub skew_x_deg: f32,
}

impl RevealStyle {
    pub const REST: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate_x_px: 0.0,
        translate_y_px: 0.0,
        skew_x_deg: 0.0,
    };

    pub fn lerp(&self, to: &RevealStyle, k: f32) -> RevealStyle {
        let mix = |a: f32, b: f32| a + (b - a) * k;
        RevealStyle {
            opacity: mix(self.opacity, to.opacity),
            translate_x_px: mix(self.translate_x_px, to.translate_x_px),
            translate_y_px: mix(self.translate_y_px, to.translate_y_px),
            skew_x_deg: mix(self.skew_x_deg, to.skew_x_deg),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) skewX({}deg)",
            crate::scene::num(self.translate_x_px),
            crate::scene::num(self.translate_y_px),
            crate::scene::num(self.skew_x_deg)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub from: RevealStyle,
    pub duration_sec: f32,
    pub ease: Ease,
    /// Trigger line as a fraction of viewport height from the top.
    pub start_ratio: f32,
    pub stagger_sec: f32,
}

impl RevealSpec {
    /// Headline/paragraph reveal: rise and unskew.
    pub fn text(start_ratio: f32) -> Self {
        Self {
            from: RevealStyle {
                opacity: 0.0,
                translate_x_px: 0.0,
                translate_y_px: TEXT_FROM_Y_PX,
                skew_x_deg: TEXT_FROM_SKEW_DEG,
            },
            duration_sec: TEXT_REVEAL_SEC,
            ease: Ease::Power3Out,
            start_ratio,
            stagger_sec: 0.0,
        }
    }

    /// Spec-card group reveal: slide in from the left, one card after another.
    pub fn cards(start_ratio: f32, stagger_sec: f32) -> Self {
        Self {
            from: RevealStyle {
                opacity: 0.0,
                translate_x_px: CARDS_FROM_X_PX,
                translate_y_px: 0.0,
                skew_x_deg: 0.0,
            },
            duration_sec: CARDS_REVEAL_SEC,
            ease: Ease::Power1Out,
            start_ratio,
            stagger_sec: stagger_sec.max(0.0),
        }
    }
}

/// Trigger line in px from the top of a root `root_height` tall.
#[inline]
pub fn trigger_line(start_ratio: f32, root_height: f32) -> f32 {
    root_height * clamp_unit(start_ratio)
}

/// IntersectionObserver root margin whose bottom edge sits on the trigger
/// line, e.g. 0.8 -> "0px 0px -20% 0px". Fractional ratios keep their
/// fraction so the observer line matches [`trigger_line`].
pub fn trigger_root_margin(start_ratio: f32) -> String {
    let inset = (1.0 - clamp_unit(start_ratio)) * 100.0;
    format!("0px 0px -{}% 0px", num(inset))
}

/// Whether an observed element is past its trigger line, judged from the
/// observer entry: intersecting the shrunken root, or already above it.
#[inline]
pub fn entry_past_line(is_intersecting: bool, element_top: f32, root_top: f32) -> bool {
    is_intersecting || element_top < root_top
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    Unplayed,
    Playing,
    Played,
    Reversing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceEvent {
    Play,
    Reverse,
}

#[derive(Clone, Debug)]
pub struct EntranceTrigger {
    spec: RevealSpec,
    members: usize,
    phase: EntrancePhase,
    time_sec: f32,
}

impl EntranceTrigger {
    pub fn new(spec: RevealSpec, members: usize) -> Self {
        Self {
            spec,
            members: members.max(1),
            phase: EntrancePhase::Unplayed,
            time_sec: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    #[inline]
    pub fn members(&self) -> usize {
        self.members
    }

    #[inline]
    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    /// The "has played" flag: set on enter, cleared on reverse.
    #[inline]
    pub fn has_played(&self) -> bool {
        matches!(self.phase, EntrancePhase::Playing | EntrancePhase::Played)
    }

    /// Length of the whole group timeline.
    pub fn total_sec(&self) -> f32 {
        self.spec.duration_sec.max(0.0) + self.spec.stagger_sec * (self.members - 1) as f32
    }

    /// Feed the element's current top edge (viewport coordinates).
    pub fn observe(&mut self, element_top: f32, viewport_height: f32) -> Option<EntranceEvent> {
        if !element_top.is_finite() || !viewport_height.is_finite() {
            return None;
        }
        self.cross(element_top <= trigger_line(self.spec.start_ratio, viewport_height))
    }

    /// Feed which side of the trigger line the element is on.
    pub fn cross(&mut self, past_line: bool) -> Option<EntranceEvent> {
        match (past_line, self.has_played()) {
            (true, false) => {
                self.phase = if self.time_sec >= self.total_sec() {
                    EntrancePhase::Played
                } else {
                    EntrancePhase::Playing
                };
                Some(EntranceEvent::Play)
            }
            (false, true) => {
                self.phase = if self.time_sec <= 0.0 {
                    EntrancePhase::Unplayed
                } else {
                    EntrancePhase::Reversing
                };
                Some(EntranceEvent::Reverse)
            }
            _ => None,
        }
    }

    /// Advance the reveal timeline. Returns whether styles changed.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        match self.phase {
            EntrancePhase::Playing => {
                let total = self.total_sec();
                self.time_sec = (self.time_sec + dt).min(total);
                if self.time_sec >= total {
                    self.phase = EntrancePhase::Played;
                }
                true
            }
            EntrancePhase::Reversing => {
                self.time_sec = (self.time_sec - dt).max(0.0);
                if self.time_sec <= 0.0 {
                    self.phase = EntrancePhase::Unplayed;
                }
                true
            }
            EntrancePhase::Unplayed | EntrancePhase::Played => false,
        }
    }

    /// Style of the `member`-th element of the group at the current time.
    pub fn style(&self, member: usize) -> RevealStyle {
        let offset = self.spec.stagger_sec * member as f32;
        let local = if self.spec.duration_sec <= 0.0 {
            if self.has_played() && self.time_sec >= offset {
                1.0
            } else {
                0.0
            }
        } else {
            (self.time_sec - offset) / self.spec.duration_sec
        };
        self.spec
            .from
            .lerp(&RevealStyle::REST, self.spec.ease.apply(local))
    }
}

pub type TriggerId = u32;

/// All triggers of a mounted page, keyed by the id written to the DOM.
#[derive(Clone, Debug, Default)]
pub struct EntranceBoard {
    triggers: FnvHashMap<TriggerId, EntranceTrigger>,
    // flipped by `observe` since the last `advance`
    flipped: SmallVec<[TriggerId; 8]>,
}

impl EntranceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TriggerId, trigger: EntranceTrigger) {
        if self.triggers.insert(id, trigger).is_some() {
            log::warn!("[reveal] trigger {} replaced", id);
        }
    }

    pub fn get(&self, id: TriggerId) -> Option<&EntranceTrigger> {
        self.triggers.get(&id)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn observe(
        &mut self,
        id: TriggerId,
        element_top: f32,
        viewport_height: f32,
    ) -> Option<EntranceEvent> {
        let event = self
            .triggers
            .get_mut(&id)?
            .observe(element_top, viewport_height)?;
        self.mark_flipped(id);
        Some(event)
    }

    pub fn cross(&mut self, id: TriggerId, past_line: bool) -> Option<EntranceEvent> {
        let event = self.triggers.get_mut(&id)?.cross(past_line)?;
        self.mark_flipped(id);
        Some(event)
    }

    fn mark_flipped(&mut self, id: TriggerId) {
        if !self.flipped.contains(&id) {
            self.flipped.push(id);
        }
    }

    /// Advance every trigger; returns ids whose styles changed (including
    /// any flipped by `observe` since the last call), ascending.
    pub fn advance(&mut self, dt_sec: f32) -> SmallVec<[TriggerId; 8]> {
        let mut changed: SmallVec<[TriggerId; 8]> = self
            .triggers
            .iter_mut()
            .filter_map(|(id, t)| t.advance(dt_sec).then_some(*id))
            .collect();
        changed.extend(self.flipped.drain(..));
        changed.sort_unstable();
        changed.dedup();
        changed
    }
}
