use crate::constants::MAX_FRAME_DT_SEC;
use crate::reveal::RevealTargets;
use crate::scene::SceneView;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use ronin_core::{EntranceBoard, Katana, KatanaInput, RenderGate, Signals};
use std::cell::RefCell;
use std::rc::Rc;

pub struct FrameContext {
    pub signals: Signals,
    pub katana: Katana,
    pub scene: SceneView,
    pub board: Rc<RefCell<EntranceBoard>>,
    pub reveals: RevealTargets,
    gate: RenderGate,

    pub last_instant: Instant,
    pub clock_sec: f32,
    raf: Option<AnimationFrame>,
}

impl FrameContext {
    pub fn new(
        signals: Signals,
        katana: Katana,
        scene: SceneView,
        board: Rc<RefCell<EntranceBoard>>,
        reveals: RevealTargets,
    ) -> Self {
        Self {
            signals,
            katana,
            scene,
            board,
            reveals,
            gate: RenderGate::default(),
            last_instant: Instant::now(),
            clock_sec: 0.0,
            raf: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.clock_sec += dt_sec;

        // Latest pointer/scroll values win; moves between frames are coalesced.
        let snap = self.signals.tick(dt_sec);
        let pose = self.katana.pose(&KatanaInput {
            progress: snap.progress,
            pointer: snap.pointer,
            clock_sec: self.clock_sec,
        });
        if self.gate.pose_changed(&pose) {
            self.scene.apply(&pose);
        }
        if self.gate.pointer_changed(snap.pointer) {
            self.scene.apply_backdrop(snap.pointer);
        }

        let changed = self.board.borrow_mut().advance(dt_sec);
        if !changed.is_empty() {
            let board = self.board.borrow();
            for id in changed {
                self.reveals.apply(id, &board);
            }
        }
    }

    /// Cancel the pending frame request, if any.
    pub fn stop(&mut self) {
        if self.raf.take().is_some() {
            log::debug!("[frame] loop stopped at {:.2}s", self.clock_sec);
        }
    }
}

/// Drive `frame()` every animation frame until the context is dropped or
/// stopped. The scheduled callback only holds a weak reference.
pub fn start_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let weak = Rc::downgrade(frame_ctx);
    let handle = request_animation_frame(move |_timestamp| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        {
            let mut ctx = ctx.borrow_mut();
            if ctx.raf.take().is_none() {
                // stopped while this callback was queued
                return;
            }
            ctx.frame();
        }
        start_loop(&ctx);
    });
    frame_ctx.borrow_mut().raf = Some(handle);
}
