// Shared tuning constants for the katana hero.

// Scroll phases (progress thresholds)
pub const BLADE_RELEASE_PROGRESS: f32 = 0.2; // blade leaves the collar
pub const HANDLE_RELEASE_PROGRESS: f32 = 0.4; // handle and guard separate
pub const PARTICLE_GATE_PROGRESS: f32 = 0.6; // ambient particles appear

// Slopes (scene units per unit progress)
pub const BLADE_SLOPE: f32 = 800.0;
pub const HANDLE_SLOPE: f32 = 400.0;
pub const GUARD_DEPTH_SLOPE: f32 = 100.0;
pub const GUARD_SCALE_PER_DEPTH: f32 = 0.005; // fake Z via scale
pub const TANG_FADE_RATE: f32 = 5.0;
pub const SHEATH_FADE_RATE: f32 = 2.0;

// Rotation (degrees)
pub const ROTATION_PER_PROGRESS: f32 = 15.0;
pub const ROTATION_POINTER_SPAN: f32 = 10.0;
pub const ASSEMBLY_BASE_ROTATION: f32 = 5.0;

// Pointer parallax
pub const PARALLAX_INTENSITY: f32 = 40.0;
pub const PARALLAX_TILT_FACTOR: f32 = 0.5;
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Scene geometry (SVG user units)
pub const VIEW_BOX: [f32; 4] = [0.0, 0.0, 1200.0, 400.0];
pub const ASSEMBLY_ORIGIN: [f32; 2] = [100.0, 150.0];
pub const ASSEMBLY_PIVOT: [f32; 2] = [400.0, 50.0];
pub const SHEATH_REST_X: f32 = -20.0;
pub const SHEATH_TRAIL: f32 = 0.2; // fraction of blade travel the sheath follows (backwards)
pub const GUARD_ORIGIN: [f32; 2] = [190.0, 20.0];
pub const GUARD_HANDLE_FOLLOW: f32 = 0.1;

// Ambient particles
pub const PARTICLE_COUNT: usize = 10;
pub const PARTICLE_ORIGIN: [f32; 2] = [200.0, 20.0];
pub const PARTICLE_SWAY_X: f32 = 800.0;
pub const PARTICLE_SWAY_Y: f32 = 50.0;
pub const PARTICLE_PHASE_STEP_Y: f32 = 13.0;
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_FLICKER_HZ: f32 = 60.0; // random draws refresh at display rate
pub const DEFAULT_PARTICLE_SEED: u64 = 42;

// Scroll scrubbing
pub const SCRUB_SECONDS: f32 = 1.0; // time to (nearly) catch up with raw scroll
pub const SCRUB_TIME_CONSTANTS: f32 = 3.0; // e-folds within SCRUB_SECONDS (~95%)
pub const SCRUB_SETTLE_EPSILON: f32 = 1e-4;

// Pointer resting position
pub const POINTER_REST: [f32; 2] = [0.5, 0.5];

// Backdrop glows (CSS px per unit pointer)
pub const BACKDROP_SHIFT_PX: f32 = 20.0;

// Entrance triggers
pub const TEXT_TRIGGER_START: f32 = 0.8; // "top 80%"
pub const TEXT_REVEAL_SEC: f32 = 1.0;
pub const TEXT_FROM_Y_PX: f32 = 50.0;
pub const TEXT_FROM_SKEW_DEG: f32 = -20.0;

pub const CARDS_TRIGGER_START: f32 = 0.7; // "top 70%"
pub const CARDS_REVEAL_SEC: f32 = 0.5;
pub const CARDS_STAGGER_SEC: f32 = 0.1;
pub const CARDS_FROM_X_PX: f32 = -20.0;
