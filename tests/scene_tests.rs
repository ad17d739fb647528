// Host-side tests for SVG markup, attribute formatting and the backdrop.

use glam::Vec2;
use ronin_core::backdrop::{glow_offsets, glow_transform};
use ronin_core::katana::{pose, parallax};
use ronin_core::scene::*;
use ronin_core::{KatanaInput, Part, PartTransform, PointerSignal, RenderGate, RevealStyle};

#[test]
fn numbers_are_compact() {
    assert_eq!(num(640.0), "640");
    assert_eq!(num(1.3), "1.3");
    assert_eq!(num(0.12345), "0.123");
    assert_eq!(num(-0.0), "0");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(-12.5), "-12.5");
}

#[test]
fn part_transforms_skip_identity_terms() {
    assert_eq!(svg_transform(&PartTransform::default()), "translate(0 0)");
    assert_eq!(
        svg_transform(&PartTransform::shifted(640.0, 0.0)),
        "translate(640 0)"
    );
    assert_eq!(
        svg_transform(&PartTransform::shifted(166.0, 20.0).with_scale(1.3)),
        "translate(166 20) scale(1.3)"
    );
    let turned = PartTransform {
        rotation_deg: 12.0,
        ..PartTransform::shifted(1.0, 2.0)
    };
    assert_eq!(svg_transform(&turned), "translate(1 2) rotate(12)");
}

#[test]
fn assembly_rotates_about_its_pivot() {
    assert_eq!(assembly_transform(5.0), "translate(100 150) rotate(5 400 50)");
    assert_eq!(
        assembly_transform(17.25),
        "translate(100 150) rotate(17.25 400 50)"
    );
}

#[test]
fn tilt_style_uses_perspective() {
    let style = tilt_style(&parallax(PointerSignal::new(1.0, 0.0)));
    assert_eq!(
        style,
        "transform: perspective(1000px) rotateY(10deg) rotateX(10deg); transition: transform 0.1s ease-out"
    );
}

#[test]
fn parts_round_trip_names() {
    for part in Part::ALL {
        assert_eq!(Part::from_name(part.name()), Some(part));
    }
    assert_eq!(Part::from_name("kissaki"), None);
    assert_eq!(Part::Guard.selector(), r#"[data-part="guard"]"#);
}

#[test]
fn markup_carries_every_part() {
    let seated = pose(&KatanaInput::default());
    let svg = markup(&seated);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</g></svg>"));
    assert!(svg.contains(r#"data-part="assembly""#));
    for part in Part::ALL {
        assert!(
            svg.contains(&format!(r#"data-part="{}""#, part.name())),
            "missing {}",
            part.name()
        );
    }
    // no particles before the reveal
    assert_eq!(svg.matches(PARTICLE_FILL).count(), 0);
    assert!(svg.contains(r#"data-part="tang" transform="translate(0 0)" opacity="0""#));

    let drawn = pose(&KatanaInput {
        progress: 1.0,
        ..KatanaInput::default()
    });
    let svg = markup(&drawn);
    assert_eq!(svg.matches(PARTICLE_FILL).count(), 10);
    assert!(svg.contains(r#"data-part="blade" transform="translate(640 0)" opacity="1""#));
}

#[test]
fn particle_markup_matches_particles() {
    let drawn = pose(&KatanaInput {
        progress: 0.8,
        clock_sec: 2.0,
        ..KatanaInput::default()
    });
    let circles = particles_markup(&drawn.particles);
    assert_eq!(circles.matches("<circle").count(), drawn.particles.len());
    assert!(particles_markup(&[]).is_empty());
}

#[test]
fn backdrop_glows_mirror_each_other() {
    let [a, b] = glow_offsets(PointerSignal::new(1.0, 0.5));
    assert_eq!(a, Vec2::new(20.0, 10.0));
    assert_eq!(b, Vec2::new(-20.0, -10.0));

    let [a, b] = glow_offsets(PointerSignal::new(0.0, 0.0));
    assert_eq!(a, Vec2::ZERO);
    assert_eq!(glow_transform(b), "translate(0px, 0px)");
    assert_eq!(glow_transform(Vec2::new(12.5, -3.0)), "translate(12.5px, -3px)");
}

#[test]
fn reveal_rest_has_no_offset() {
    assert_eq!(
        RevealStyle::REST.css_transform(),
        "translate(0px, 0px) skewX(0deg)"
    );
}

#[test]
fn still_frames_skip_dom_writes() {
    let mut gate = RenderGate::default();
    let at = |progress: f32, clock_sec: f32| {
        pose(&KatanaInput {
            progress,
            clock_sec,
            ..KatanaInput::default()
        })
    };

    assert!(gate.pose_changed(&at(0.3, 0.0)));
    // settled scrub below the particle gate: the clock alone changes nothing
    assert!(!gate.pose_changed(&at(0.3, 0.5)));
    assert!(!gate.pose_changed(&at(0.3, 1.0)));
    assert!(gate.pose_changed(&at(0.31, 1.0)));

    // particles drift with the clock
    assert!(gate.pose_changed(&at(0.8, 1.0)));
    assert!(gate.pose_changed(&at(0.8, 1.1)));

    assert!(gate.pointer_changed(PointerSignal::default()));
    assert!(!gate.pointer_changed(PointerSignal::default()));
    assert!(gate.pointer_changed(PointerSignal::new(0.2, 0.5)));
}
