use crate::constants::{HERO_ROOT_ID, SCENE_HOST_ID};
use crate::dom;
use crate::events;
use crate::frame::{self, FrameContext};
use crate::layout;
use crate::reveal::{RevealObserver, RevealTargets, Watch};
use crate::scene::SceneView;
use gloo::events::EventListener;
use ronin_core::{EntranceBoard, HeroConfig, KatanaInput, Signals};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted hero page. Owns every subscription it makes; dropping it is the
/// unmount and releases listeners, observers and the frame request once.
pub struct Hero {
    frame: Rc<RefCell<FrameContext>>,
    listeners: Vec<EventListener>,
    observers: Vec<RevealObserver>,
}

fn read_config(root: &web::Element) -> HeroConfig {
    let (config, rejected) = HeroConfig::from_attrs(|key| root.get_attribute(key));
    for e in rejected {
        log::warn!("[config] ignoring override: {}", e);
    }
    config
}

/// One observer per distinct trigger line.
fn observe_reveals(
    watches: &[Watch],
    board: &Rc<RefCell<EntranceBoard>>,
) -> anyhow::Result<Vec<RevealObserver>> {
    let mut ratios: Vec<f32> = watches.iter().map(|w| w.start_ratio).collect();
    ratios.sort_by(|a, b| a.total_cmp(b));
    ratios.dedup();
    ratios
        .into_iter()
        .map(|ratio| {
            let group: Vec<&Watch> = watches.iter().filter(|w| w.start_ratio == ratio).collect();
            RevealObserver::new(ratio, Rc::downgrade(board), &group)
        })
        .collect()
}

impl Hero {
    pub fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = dom::element_by_id(&document, HERO_ROOT_ID)?;
        let host = dom::element_by_id(&document, SCENE_HOST_ID)?;

        let config = read_config(&root);
        let sections = layout::apply_sections(&root);

        // Signals first, so the scene mounts at the current scroll position.
        let signals = Signals::mount(config.scrub_sec);
        let handle = signals.handle();
        let mut listeners = Vec::with_capacity(3);
        listeners.push(events::track_pointer(&window, handle.clone()));
        listeners.extend(events::track_scroll_progress(&window, &root, handle));

        let katana = config.katana();
        let snap = signals.snapshot();
        let pose = katana.pose(&KatanaInput {
            progress: snap.progress,
            pointer: snap.pointer,
            clock_sec: 0.0,
        });
        let scene = SceneView::mount(&document, &host, &pose)?;

        let mut board = EntranceBoard::new();
        let (reveals, watches) = RevealTargets::register(&root, &config, &mut board);
        let board = Rc::new(RefCell::new(board));
        let observers = observe_reveals(&watches, &board)?;
        // Hide reveal targets only once nothing else can fail, so a failed
        // mount leaves the page content visible.
        reveals.apply_all(&board.borrow());

        let frame = Rc::new(RefCell::new(FrameContext::new(
            signals, katana, scene, board, reveals,
        )));
        frame::start_loop(&frame);

        log::info!(
            "[hero] mounted: progress={:.3} sections={} observers={} scrub={}s",
            snap.progress,
            sections,
            observers.len(),
            config.scrub_sec
        );
        Ok(Self {
            frame,
            listeners,
            observers,
        })
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        self.listeners.clear();
        self.observers.clear();
        let mut frame = self.frame.borrow_mut();
        frame.stop();
        frame.reveals.clear();
        log::info!("[hero] unmounted after {:.1}s", frame.clock_sec);
    }
}
