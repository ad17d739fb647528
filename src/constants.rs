// DOM hooks and observer tuning for the web front-end.
// The ids and classes below must match `index.html`.

// Scroll region and scene host
pub const HERO_ROOT_ID: &str = "hero";
pub const SCENE_HOST_ID: &str = "katana-host";

// Backdrop glows following the pointer (first follows, second mirrors)
pub const GLOW_IDS: [&str; 2] = ["glow-a", "glow-b"];

// Layout wrappers
pub const SECTION_SELECTOR: &str = "section[data-align]";
pub const SECTION_ALIGN_ATTR: &str = "data-align";
pub const SECTION_EXTRA_ATTR: &str = "data-class";

// Entrance reveals
pub const TEXT_REVEAL_SELECTOR: &str = ".anim-text";
pub const CARDS_GROUP_SELECTOR: &str = "#tech-specs";
pub const CARD_SELECTOR: &str = ".spec-item";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

// Input events
pub const POINTER_EVENT: &str = "pointermove";
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";

// Frame pacing: clamp long gaps (tab switches) so smoothing does not jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
