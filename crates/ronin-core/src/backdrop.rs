use crate::constants::BACKDROP_SHIFT_PX;
use crate::signal::PointerSignal;
use glam::Vec2;

/// CSS px offsets of the two backdrop glows. The first follows the pointer,
/// the second mirrors it.
#[inline]
pub fn glow_offsets(pointer: PointerSignal) -> [Vec2; 2] {
    let shift = pointer.0 * BACKDROP_SHIFT_PX;
    [shift, -shift]
}

pub fn glow_transform(offset: Vec2) -> String {
    format!(
        "translate({}px, {}px)",
        crate::scene::num(offset.x),
        crate::scene::num(offset.y)
    )
}
