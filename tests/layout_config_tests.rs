// Host-side tests for section layout classes and hero config overrides.

use ronin_core::config::*;
use ronin_core::entrance::Ease;
use ronin_core::layout::{section_classes, SECTION_BASE_CLASSES};
use ronin_core::{Align, ConfigError, HeroConfig};
use std::collections::HashMap;

#[test]
fn align_parses_attribute_values() {
    assert_eq!(Align::from_attr("left"), Align::Left);
    assert_eq!(Align::from_attr(" Right "), Align::Right);
    assert_eq!(Align::from_attr("FULL"), Align::Full);
    assert_eq!(Align::from_attr("center"), Align::Center);
    assert_eq!(Align::from_attr(""), Align::Center);
    assert_eq!(Align::from_attr("diagonal"), Align::Center);
    assert_eq!(Align::default(), Align::Center);
}

#[test]
fn align_maps_to_flex_and_text_classes() {
    assert_eq!(Align::Left.classes(), "items-start text-left");
    assert_eq!(Align::Right.classes(), "items-end text-right");
    assert_eq!(Align::Center.classes(), "items-center text-center");
    assert_eq!(Align::Full.classes(), Align::Center.classes());
}

#[test]
fn section_classes_append_extras() {
    let plain = section_classes(Align::Left, "");
    assert_eq!(plain, format!("{} items-start text-left", SECTION_BASE_CLASSES));

    let extra = section_classes(Align::Right, "  bg-black/40 ");
    assert!(extra.starts_with(SECTION_BASE_CLASSES));
    assert!(extra.ends_with("items-end text-right bg-black/40"));
    assert!(!extra.contains("  "));
}

#[test]
fn config_defaults() {
    let c = HeroConfig::default();
    assert_eq!(c.scrub_sec, 1.0);
    assert_eq!(c.text_start, 0.8);
    assert_eq!(c.cards_start, 0.7);
    assert_eq!(c.card_stagger_sec, 0.1);
    assert_eq!(c.particle_seed, 42);
    assert_eq!(c.particle_count, 10);

    let text = c.text_reveal();
    assert_eq!(text.duration_sec, 1.0);
    assert_eq!(text.ease, Ease::Power3Out);
    assert_eq!(text.start_ratio, 0.8);

    let cards = c.cards_reveal();
    assert_eq!(cards.duration_sec, 0.5);
    assert_eq!(cards.ease, Ease::Power1Out);
    assert_eq!(cards.stagger_sec, 0.1);

    let katana = c.katana();
    assert_eq!(katana.particle_count, 10);
    assert_eq!(katana.particle_seed, 42);
}

#[test]
fn config_applies_valid_overrides() {
    let mut c = HeroConfig::default();
    c.apply(KEY_SCRUB, "0").unwrap();
    c.apply(KEY_TEXT_START, " 0.5 ").unwrap();
    c.apply(KEY_CARDS_START, "1").unwrap();
    c.apply(KEY_CARD_STAGGER, "0.25").unwrap();
    c.apply(KEY_PARTICLE_SEED, "1234567").unwrap();
    c.apply(KEY_PARTICLE_COUNT, "4").unwrap();

    assert_eq!(c.scrub_sec, 0.0);
    assert_eq!(c.text_start, 0.5);
    assert_eq!(c.cards_start, 1.0);
    assert_eq!(c.card_stagger_sec, 0.25);
    assert_eq!(c.particle_seed, 1_234_567);
    assert_eq!(c.particle_count, 4);
}

#[test]
fn config_rejects_bad_overrides_and_keeps_values() {
    let mut c = HeroConfig::default();

    let err = c.apply(KEY_SCRUB, "fast").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    assert_eq!(err.to_string(), "data-scrub: `fast` is not a number");

    let err = c.apply(KEY_TEXT_START, "1.5").unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
    assert_eq!(err.to_string(), "data-text-start: 1.5 is outside 0..=1");

    assert!(c.apply(KEY_PARTICLE_COUNT, "11").is_err());
    assert!(c.apply(KEY_PARTICLE_SEED, "-1").is_err());
    assert!(c.apply(KEY_CARD_STAGGER, "NaN").is_err());

    let err = c.apply("data-color", "red").unwrap_err();
    assert_eq!(err, ConfigError::UnknownKey("data-color".into()));
    assert_eq!(err.to_string(), "unknown config key `data-color`");

    assert_eq!(c, HeroConfig::default());
}

#[test]
fn config_from_attrs_collects_rejects() {
    let attrs: HashMap<&str, &str> = [
        (KEY_SCRUB, "2"),
        (KEY_TEXT_START, "oops"),
        (KEY_PARTICLE_COUNT, "6"),
    ]
    .into_iter()
    .collect();

    let (c, rejected) = HeroConfig::from_attrs(|key| attrs.get(key).map(|v| v.to_string()));
    assert_eq!(c.scrub_sec, 2.0);
    assert_eq!(c.text_start, 0.8);
    assert_eq!(c.particle_count, 6);
    assert_eq!(rejected.len(), 1);

    let (c, rejected) = HeroConfig::from_attrs(|_| None);
    assert_eq!(c, HeroConfig::default());
    assert!(rejected.is_empty());
}
