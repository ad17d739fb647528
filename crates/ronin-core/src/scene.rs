//! Static SVG scene graph for the katana.
//!
//! Every animated part is a `<g data-part="...">` wrapper around fixed shapes,
//! so a frame only has to rewrite `transform`/`opacity` on the wrappers and
//! the particle group's children.

use crate::constants::{ASSEMBLY_ORIGIN, ASSEMBLY_PIVOT, PERSPECTIVE_PX, VIEW_BOX};
use crate::katana::{KatanaPose, PartTransform, Particle, Tilt};
use crate::signal::PointerSignal;
use std::fmt::Write as _;

pub const PART_ATTR: &str = "data-part";
pub const ASSEMBLY_PART: &str = "assembly";
pub const PARTICLE_FILL: &str = "#bd00ff";

/// Named parts in paint order (back to front).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Sheath,
    Tang,
    Blade,
    Collar,
    Guard,
    Handle,
    Particles,
}

impl Part {
    pub const ALL: [Part; 7] = [
        Part::Sheath,
        Part::Tang,
        Part::Blade,
        Part::Collar,
        Part::Guard,
        Part::Handle,
        Part::Particles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Part::Sheath => "sheath",
            Part::Tang => "tang",
            Part::Blade => "blade",
            Part::Collar => "collar",
            Part::Guard => "guard",
            Part::Handle => "handle",
            Part::Particles => "particles",
        }
    }

    pub fn from_name(name: &str) -> Option<Part> {
        Part::ALL.into_iter().find(|p| p.name() == name)
    }

    /// CSS selector for the part's wrapper inside the mounted SVG.
    pub fn selector(self) -> String {
        format!("[{}=\"{}\"]", PART_ATTR, self.name())
    }

    /// Transform driving this part, `None` for the particle set.
    pub fn transform(self, pose: &KatanaPose) -> Option<&PartTransform> {
        match self {
            Part::Sheath => Some(&pose.sheath),
            Part::Tang => Some(&pose.tang),
            Part::Blade => Some(&pose.blade),
            Part::Collar => Some(&pose.collar),
            Part::Guard => Some(&pose.guard),
            Part::Handle => Some(&pose.handle),
            Part::Particles => None,
        }
    }

    fn shapes(self) -> &'static str {
        match self {
            Part::Sheath => SHEATH_SHAPES,
            Part::Tang => TANG_SHAPES,
            Part::Blade => BLADE_SHAPES,
            Part::Collar => COLLAR_SHAPES,
            Part::Guard => GUARD_SHAPES,
            Part::Handle => HANDLE_SHAPES,
            Part::Particles => "",
        }
    }
}

// Saya
const SHEATH_SHAPES: &str =
    r##"<path d="M200,-5 Q600,-35 900,-5 L905,25 Q600,0 200,25 Z" fill="#111" stroke="#333" stroke-width="2"/>"##;
// Nakago
const TANG_SHAPES: &str =
    r##"<path d="M200,5 L100,10 L100,30 L200,35 Z" fill="#444" stroke="#ff0055" stroke-width="1"/>"##;
// steel, hamon, shine
const BLADE_SHAPES: &str = concat!(
    r##"<path d="M200,0 Q600,-30 1000,0 L1020,10 L1000,20 Q600,0 200,40 Z" fill="url(#bladeGradient)" stroke="#ccc" stroke-width="1"/>"##,
    r##"<path d="M210,30 Q600,-5 980,15 L970,18 Q600,2 210,38 Z" fill="#ddd" opacity="0.5" filter="url(#glow)"/>"##,
    r##"<path d="M200,5 Q600,-25 1000,5 L1000,10 Q600,-15 200,15 Z" fill="url(#bladeShine)" opacity="0.3" style="mix-blend-mode:overlay"/>"##,
);
// Habaki
const COLLAR_SHAPES: &str = r##"<path d="M200,0 L220,0 L220,40 L200,40 Z" fill="#b8860b"/>"##;
// Tsuba
const GUARD_SHAPES: &str = concat!(
    r##"<circle cx="0" cy="0" r="45" fill="#000" stroke="#ff0055" stroke-width="2"/>"##,
    r##"<circle cx="0" cy="0" r="35" fill="none" stroke="#333" stroke-width="1" stroke-dasharray="5,5"/>"##,
    r##"<circle cx="-20" cy="-20" r="5" fill="#000" stroke="#ff0055"/>"##,
    r##"<circle cx="20" cy="20" r="5" fill="#000" stroke="#ff0055"/>"##,
);
// Tsuka, kashira, menuki
const HANDLE_SHAPES: &str = concat!(
    r##"<rect x="0" y="5" width="190" height="30" fill="url(#handlePattern)"/>"##,
    r##"<path d="M0,5 L-10,0 L-10,40 L0,35 Z" fill="#000" stroke="#555"/>"##,
    r##"<circle cx="100" cy="20" r="5" fill="#d4af37" opacity="0.8"/>"##,
);

const DEFS: &str = concat!(
    "<defs>",
    r##"<linearGradient id="bladeGradient" x1="0%" y1="0%" x2="100%" y2="0%">"##,
    r##"<stop offset="0%" stop-color="#888"/><stop offset="50%" stop-color="#eee"/><stop offset="100%" stop-color="#aaa"/>"##,
    "</linearGradient>",
    r##"<linearGradient id="bladeShine" x1="0%" y1="0%" x2="100%" y2="10%">"##,
    r##"<stop offset="0%" stop-color="transparent"/><stop offset="40%" stop-color="rgba(255,255,255,0.8)"/><stop offset="60%" stop-color="transparent"/>"##,
    "</linearGradient>",
    r##"<pattern id="handlePattern" x="0" y="0" width="20" height="20" patternUnits="userSpaceOnUse">"##,
    r##"<rect width="20" height="20" fill="#111"/><path d="M10,0 L20,10 L10,20 L0,10 Z" fill="#222" stroke="#333" stroke-width="1"/>"##,
    "</pattern>",
    r##"<filter id="glow"><feGaussianBlur stdDeviation="5" result="coloredBlur"/>"##,
    r##"<feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"##,
    r##"<filter id="chromatic"><feOffset in="SourceGraphic" dx="2" dy="0" result="red"/>"##,
    r##"<feOffset in="SourceGraphic" dx="-2" dy="0" result="blue"/><feBlend mode="screen" in="red" in2="blue"/></filter>"##,
    "</defs>",
);

/// Compact number formatting: at most 3 decimals, no trailing zeros, no `-0`.
pub fn num(v: f32) -> String {
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// SVG `transform` attribute for a part. Identity rotate/scale are omitted.
pub fn svg_transform(t: &PartTransform) -> String {
    let mut out = format!("translate({} {})", num(t.translate.x), num(t.translate.y));
    if t.rotation_deg != 0.0 {
        _ = write!(out, " rotate({})", num(t.rotation_deg));
    }
    if t.scale != 1.0 {
        _ = write!(out, " scale({})", num(t.scale));
    }
    out
}

/// Transform of the assembly group: fixed offset, then rotation about the pivot.
pub fn assembly_transform(rotation_deg: f32) -> String {
    format!(
        "translate({} {}) rotate({} {} {})",
        num(ASSEMBLY_ORIGIN[0]),
        num(ASSEMBLY_ORIGIN[1]),
        num(rotation_deg),
        num(ASSEMBLY_PIVOT[0]),
        num(ASSEMBLY_PIVOT[1]),
    )
}

/// Inline style for the `<svg>` root: perspective tilt with a short ease.
pub fn tilt_style(tilt: &Tilt) -> String {
    format!(
        "transform: perspective({}px) rotateY({}deg) rotateX({}deg); transition: transform 0.1s ease-out",
        num(PERSPECTIVE_PX),
        num(tilt.rotate_y_deg),
        num(tilt.rotate_x_deg),
    )
}

pub fn particles_markup(particles: &[Particle]) -> String {
    let mut out = String::with_capacity(particles.len() * 80);
    for p in particles {
        _ = write!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
            num(p.center.x),
            num(p.center.y),
            num(p.radius),
            PARTICLE_FILL,
            num(p.opacity),
        );
    }
    out
}

/// Full `<svg>` markup for a pose; used for the initial mount.
pub fn markup(pose: &KatanaPose) -> String {
    let mut out = String::with_capacity(4096);
    _ = write!(
        out,
        r#"<svg viewBox="{} {} {} {}" class="w-full h-full overflow-visible pointer-events-none" style="{}">"#,
        num(VIEW_BOX[0]),
        num(VIEW_BOX[1]),
        num(VIEW_BOX[2]),
        num(VIEW_BOX[3]),
        tilt_style(&pose.tilt),
    );
    out.push_str(DEFS);
    _ = write!(
        out,
        r#"<g {}="{}" transform="{}">"#,
        PART_ATTR,
        ASSEMBLY_PART,
        assembly_transform(pose.assembly_rotation_deg)
    );
    for part in Part::ALL {
        match part.transform(pose) {
            Some(t) => {
                _ = write!(
                    out,
                    r#"<g {}="{}" transform="{}" opacity="{}">{}</g>"#,
                    PART_ATTR,
                    part.name(),
                    svg_transform(t),
                    num(t.opacity),
                    part.shapes()
                );
            }
            None => {
                _ = write!(
                    out,
                    r#"<g {}="{}" filter="url(#glow)">{}</g>"#,
                    PART_ATTR,
                    part.name(),
                    particles_markup(&pose.particles)
                );
            }
        }
    }
    out.push_str("</g></svg>");
    out
}

/// Remembers what was last written to the DOM so unchanged frames are skipped.
///
/// Below the particle gate a settled scrub and a still pointer give the same
/// pose every frame; once particles show, the clock keeps the pose moving.
#[derive(Clone, Debug, Default)]
pub struct RenderGate {
    pose: Option<KatanaPose>,
    pointer: Option<PointerSignal>,
}

impl RenderGate {
    /// Whether `pose` differs from the last one drawn; records it if so.
    pub fn pose_changed(&mut self, pose: &KatanaPose) -> bool {
        if self.pose.as_ref() == Some(pose) {
            return false;
        }
        self.pose = Some(pose.clone());
        true
    }

    pub fn pointer_changed(&mut self, pointer: PointerSignal) -> bool {
        if self.pointer == Some(pointer) {
            return false;
        }
        self.pointer = Some(pointer);
        true
    }
}
