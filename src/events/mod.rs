pub mod pointer;
pub mod scroll;

pub use pointer::track_pointer;
pub use scroll::{sample_scroll, track_scroll_progress};
