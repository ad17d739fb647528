//! Katana pose mapper.
//!
//! Maps `(progress, pointer, clock)` to a transform per named part. Progress
//! phases:
//!
//! - 0.0 – 0.2: assembled, sheath fading
//! - 0.2 – 0.5: unsheathe (blade travels out)
//! - 0.5 – 0.8: explode (handle and guard separate, tang shows)
//! - 0.8 – 1.0: wireframe (particles around the blade)
//!
//! Everything here is a pure function of its inputs.

use crate::constants::*;
use crate::signal::{clamp_unit, PointerSignal};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

// ---------------- Scalar mapping ----------------

#[inline]
pub fn blade_offset(progress: f32) -> f32 {
    (progress - BLADE_RELEASE_PROGRESS).max(0.0) * BLADE_SLOPE
}

#[inline]
pub fn handle_offset(progress: f32) -> f32 {
    -(progress - HANDLE_RELEASE_PROGRESS).max(0.0) * HANDLE_SLOPE
}

#[inline]
pub fn guard_depth(progress: f32) -> f32 {
    (progress - HANDLE_RELEASE_PROGRESS).max(0.0) * GUARD_DEPTH_SLOPE
}

#[inline]
pub fn guard_scale(progress: f32) -> f32 {
    1.0 + guard_depth(progress) * GUARD_SCALE_PER_DEPTH
}

#[inline]
pub fn rotation(progress: f32, pointer_y: f32) -> f32 {
    progress * ROTATION_PER_PROGRESS + (pointer_y - 0.5) * ROTATION_POINTER_SPAN
}

#[inline]
pub fn tang_opacity(progress: f32) -> f32 {
    clamp_unit((progress - HANDLE_RELEASE_PROGRESS) * TANG_FADE_RATE)
}

/// Unclamped; negative once progress passes 0.5.
#[inline]
pub fn sheath_opacity(progress: f32) -> f32 {
    1.0 - progress * SHEATH_FADE_RATE
}

#[inline]
pub fn particles_visible(progress: f32) -> bool {
    progress >= PARTICLE_GATE_PROGRESS
}

/// Whole-scene perspective tilt from the pointer alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_y_deg: f32,
    pub rotate_x_deg: f32,
}

#[inline]
pub fn parallax(pointer: PointerSignal) -> Tilt {
    let px = (pointer.x() - 0.5) * PARALLAX_INTENSITY;
    let py = (pointer.y() - 0.5) * PARALLAX_INTENSITY;
    Tilt {
        rotate_y_deg: px * PARALLAX_TILT_FACTOR,
        rotate_x_deg: -py * PARALLAX_TILT_FACTOR,
    }
}

// ---------------- Pose ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartTransform {
    pub translate: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for PartTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl PartTransform {
    #[inline]
    pub fn shifted(x: f32, y: f32) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Opacity is clamped here, the render boundary.
    #[inline]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = clamp_unit(opacity);
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

pub type Particles = SmallVec<[Particle; PARTICLE_COUNT]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KatanaInput {
    pub progress: f32,
    pub pointer: PointerSignal,
    /// Animation clock in seconds; drives particle drift.
    pub clock_sec: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KatanaPose {
    pub tilt: Tilt,
    /// Rotation of the assembly group about `ASSEMBLY_PIVOT`.
    pub assembly_rotation_deg: f32,
    pub sheath: PartTransform,
    pub tang: PartTransform,
    pub blade: PartTransform,
    pub collar: PartTransform,
    pub guard: PartTransform,
    pub handle: PartTransform,
    pub particles: Particles,
}

/// Particle setup for a mounted scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Katana {
    pub particle_count: usize,
    pub particle_seed: u64,
}

impl Default for Katana {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_seed: DEFAULT_PARTICLE_SEED,
        }
    }
}

impl Katana {
    pub fn pose(&self, input: &KatanaInput) -> KatanaPose {
        let progress = clamp_unit(input.progress);
        let pointer = input.pointer.clamped();

        let blade_x = blade_offset(progress);
        let handle_x = handle_offset(progress);

        let particles = if particles_visible(progress) {
            self.particles(blade_x, input.clock_sec)
        } else {
            Particles::new()
        };

        KatanaPose {
            tilt: parallax(pointer),
            assembly_rotation_deg: ASSEMBLY_BASE_ROTATION + rotation(progress, pointer.y()),
            sheath: PartTransform::shifted(-blade_x * SHEATH_TRAIL + SHEATH_REST_X, 0.0)
                .with_opacity(sheath_opacity(progress)),
            tang: PartTransform::shifted(blade_x, 0.0).with_opacity(tang_opacity(progress)),
            blade: PartTransform::shifted(blade_x, 0.0),
            collar: PartTransform::shifted(blade_x, 0.0),
            guard: PartTransform::shifted(
                GUARD_ORIGIN[0] + handle_x * GUARD_HANDLE_FOLLOW,
                GUARD_ORIGIN[1],
            )
            .with_scale(guard_scale(progress)),
            handle: PartTransform::shifted(handle_x, 0.0),
            particles,
        }
    }

    fn particles(&self, blade_x: f32, clock_sec: f32) -> Particles {
        let clock = if clock_sec.is_finite() { clock_sec } else { 0.0 };
        let tick = (clock.max(0.0) * PARTICLE_FLICKER_HZ) as u64;
        (0..self.particle_count.min(PARTICLE_COUNT))
            .map(|i| {
                let mut rng = particle_rng(self.particle_seed, i, tick);
                let fi = i as f32;
                Particle {
                    center: Vec2::new(
                        PARTICLE_ORIGIN[0] + blade_x + (fi + clock).sin() * PARTICLE_SWAY_X,
                        PARTICLE_ORIGIN[1] + (fi * PARTICLE_PHASE_STEP_Y).cos() * PARTICLE_SWAY_Y,
                    ),
                    radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
                    opacity: rng.gen::<f32>(),
                }
            })
            .collect()
    }
}

/// Per-particle stream, reseeded every flicker tick.
fn particle_rng(seed: u64, index: usize, tick: u64) -> StdRng {
    let mix = seed
        ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ tick.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    StdRng::seed_from_u64(mix)
}

/// Pose with the default particle setup.
#[inline]
pub fn pose(input: &KatanaInput) -> KatanaPose {
    Katana::default().pose(input)
}
