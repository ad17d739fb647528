use crate::constants::*;
use crate::dom;
use ronin_core::entrance::{entry_past_line, trigger_line, trigger_root_margin, TriggerId};
use ronin_core::{EntranceBoard, EntranceTrigger, HeroConfig};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements restyled by each trigger, indexed by trigger id.
#[derive(Default)]
pub struct RevealTargets {
    groups: Vec<Vec<web::HtmlElement>>,
}

/// One observed element and the line it is measured against.
pub struct Watch {
    pub element: web::Element,
    pub start_ratio: f32,
}

impl RevealTargets {
    /// Tag reveal elements under `root`, register their triggers and return
    /// what each observer has to watch.
    pub fn register(
        root: &web::Element,
        config: &HeroConfig,
        board: &mut EntranceBoard,
    ) -> (Self, Vec<Watch>) {
        let mut targets = Self::default();
        let mut watches = Vec::new();

        for el in dom::query_all(root, TEXT_REVEAL_SELECTOR) {
            let Ok(html) = el.clone().dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let id = targets.push(vec![html]);
            _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
            board.insert(id, EntranceTrigger::new(config.text_reveal(), 1));
            watches.push(Watch {
                element: el,
                start_ratio: config.text_start,
            });
        }

        if let Some(group) = root.query_selector(CARDS_GROUP_SELECTOR).ok().flatten() {
            let cards: Vec<web::HtmlElement> = dom::query_all(&group, CARD_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
                .collect();
            if !cards.is_empty() {
                let count = cards.len();
                let id = targets.push(cards);
                _ = group.set_attribute(REVEAL_ID_ATTR, &id.to_string());
                board.insert(id, EntranceTrigger::new(config.cards_reveal(), count));
                watches.push(Watch {
                    element: group,
                    start_ratio: config.cards_start,
                });
            }
        }

        log::info!(
            "[reveal] {} triggers over {} elements",
            board.len(),
            targets.groups.iter().map(Vec::len).sum::<usize>()
        );
        (targets, watches)
    }

    fn push(&mut self, group: Vec<web::HtmlElement>) -> TriggerId {
        self.groups.push(group);
        (self.groups.len() - 1) as TriggerId
    }

    /// Write the trigger's current styles onto its elements.
    pub fn apply(&self, id: TriggerId, board: &EntranceBoard) {
        let (Some(group), Some(trigger)) = (self.groups.get(id as usize), board.get(id)) else {
            return;
        };
        for (i, el) in group.iter().enumerate() {
            let style = trigger.style(i);
            dom::set_style(el, "opacity", &ronin_core::scene::num(style.opacity));
            dom::set_style(el, "transform", &style.css_transform());
        }
    }

    pub fn apply_all(&self, board: &EntranceBoard) {
        for id in 0..self.groups.len() {
            self.apply(id as TriggerId, board);
        }
    }

    /// Drop inline reveal styles so unmounted content stays visible.
    pub fn clear(&self) {
        for el in self.groups.iter().flatten() {
            _ = el.style().remove_property("opacity");
            _ = el.style().remove_property("transform");
        }
    }
}

/// IntersectionObserver whose root bottom sits on a trigger line. Feeds
/// crossings into the board; disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(
        start_ratio: f32,
        board: Weak<RefCell<EntranceBoard>>,
        watches: &[&Watch],
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let Some(board) = board.upgrade() else {
                    return;
                };
                let mut board = board.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(id) = entry
                        .target()
                        .get_attribute(REVEAL_ID_ATTR)
                        .and_then(|v| v.parse::<TriggerId>().ok())
                    else {
                        continue;
                    };
                    // Same line as the root margin: decide from the entry, not
                    // from a separately measured viewport.
                    let top = entry.bounding_client_rect().top() as f32;
                    let past_line = match entry.root_bounds() {
                        Some(root) => {
                            entry_past_line(entry.is_intersecting(), top, root.top() as f32)
                        }
                        None => top <= trigger_line(start_ratio, dom::viewport_size().y),
                    };
                    if let Some(event) = board.cross(id, past_line) {
                        log::debug!("[reveal] trigger {} {:?}", id, event);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_root_margin(&trigger_root_margin(start_ratio));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        for watch in watches {
            observer.observe(&watch.element);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
