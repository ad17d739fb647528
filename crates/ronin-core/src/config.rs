//! Hero tunables and their `data-*` overrides.

use crate::constants::*;
use crate::entrance::RevealSpec;
use crate::error::ConfigError;
use crate::katana::Katana;

pub const KEY_SCRUB: &str = "data-scrub";
pub const KEY_TEXT_START: &str = "data-text-start";
pub const KEY_CARDS_START: &str = "data-cards-start";
pub const KEY_CARD_STAGGER: &str = "data-card-stagger";
pub const KEY_PARTICLE_SEED: &str = "data-particle-seed";
pub const KEY_PARTICLE_COUNT: &str = "data-particle-count";

pub const CONFIG_KEYS: [&str; 6] = [
    KEY_SCRUB,
    KEY_TEXT_START,
    KEY_CARDS_START,
    KEY_CARD_STAGGER,
    KEY_PARTICLE_SEED,
    KEY_PARTICLE_COUNT,
];

#[derive(Clone, Debug, PartialEq)]
pub struct HeroConfig {
    pub scrub_sec: f32,
    pub text_start: f32,
    pub cards_start: f32,
    pub card_stagger_sec: f32,
    pub particle_seed: u64,
    pub particle_count: usize,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            scrub_sec: SCRUB_SECONDS,
            text_start: TEXT_TRIGGER_START,
            cards_start: CARDS_TRIGGER_START,
            card_stagger_sec: CARDS_STAGGER_SEC,
            particle_seed: DEFAULT_PARTICLE_SEED,
            particle_count: PARTICLE_COUNT,
        }
    }
}

fn parse_ranged(key: &str, value: &str, min: f64, max: f64) -> Result<f64, ConfigError> {
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })?;
    if !v.is_finite() || v < min || v > max {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

impl HeroConfig {
    /// Apply one override. On error the current value is kept.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            KEY_SCRUB => self.scrub_sec = parse_ranged(key, value, 0.0, 10.0)? as f32,
            KEY_TEXT_START => self.text_start = parse_ranged(key, value, 0.0, 1.0)? as f32,
            KEY_CARDS_START => self.cards_start = parse_ranged(key, value, 0.0, 1.0)? as f32,
            KEY_CARD_STAGGER => self.card_stagger_sec = parse_ranged(key, value, 0.0, 2.0)? as f32,
            KEY_PARTICLE_SEED => {
                self.particle_seed =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidNumber {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?
            }
            KEY_PARTICLE_COUNT => {
                self.particle_count = parse_ranged(key, value, 0.0, PARTICLE_COUNT as f64)? as usize
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Build from an attribute lookup. Rejected overrides are returned
    /// alongside the config so the caller can report them.
    pub fn from_attrs(mut lookup: impl FnMut(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        for key in CONFIG_KEYS {
            if let Some(value) = lookup(key) {
                if let Err(e) = config.apply(key, &value) {
                    rejected.push(e);
                }
            }
        }
        (config, rejected)
    }

    pub fn katana(&self) -> Katana {
        Katana {
            particle_count: self.particle_count,
            particle_seed: self.particle_seed,
        }
    }

    pub fn text_reveal(&self) -> RevealSpec {
        RevealSpec::text(self.text_start)
    }

    pub fn cards_reveal(&self) -> RevealSpec {
        RevealSpec::cards(self.cards_start, self.card_stagger_sec)
    }
}
