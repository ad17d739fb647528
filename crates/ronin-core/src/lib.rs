pub mod backdrop;
pub mod config;
pub mod constants;
pub mod entrance;
pub mod error;
pub mod katana;
pub mod layout;
pub mod scene;
pub mod signal;

pub use config::HeroConfig;
pub use entrance::{
    EntranceBoard, EntranceEvent, EntrancePhase, EntranceTrigger, RevealSpec, RevealStyle,
};
pub use error::ConfigError;
pub use katana::{Katana, KatanaInput, KatanaPose, PartTransform, Particle, Tilt};
pub use layout::Align;
pub use scene::{Part, RenderGate};
pub use signal::{PointerSignal, ScrollScrub, SignalHandle, SignalSnapshot, Signals};
