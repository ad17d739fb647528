use crate::constants::GLOW_IDS;
use crate::dom;
use ronin_core::scene::{self, Part};
use ronin_core::{backdrop, KatanaPose, PointerSignal};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mounted katana SVG plus the backdrop glows.
pub struct SceneView {
    host: web::Element,
    svg: web::Element,
    assembly: web::Element,
    parts: Vec<(Part, web::Element)>,
    particles: web::Element,
    particles_shown: bool,
    glows: Vec<web::HtmlElement>,
}

impl SceneView {
    pub fn mount(
        document: &web::Document,
        host: &web::Element,
        pose: &KatanaPose,
    ) -> anyhow::Result<Self> {
        host.set_inner_html(&scene::markup(pose));
        let svg = dom::query_one(host, "svg")?;
        let assembly = dom::query_one(
            host,
            &format!("[{}=\"{}\"]", scene::PART_ATTR, scene::ASSEMBLY_PART),
        )?;

        let mut parts = Vec::with_capacity(Part::ALL.len());
        let mut particles = None;
        for part in Part::ALL {
            let el = dom::query_one(host, &part.selector())?;
            if part == Part::Particles {
                particles = Some(el);
            } else {
                parts.push((part, el));
            }
        }
        let particles = particles.ok_or_else(|| anyhow::anyhow!("missing particle group"))?;

        let glows = GLOW_IDS
            .iter()
            .filter_map(|id| {
                let el = document.get_element_by_id(id);
                if el.is_none() {
                    log::warn!("[hero] no #{} backdrop glow", id);
                }
                el?.dyn_into::<web::HtmlElement>().ok()
            })
            .collect();

        Ok(Self {
            host: host.clone(),
            svg,
            assembly,
            parts,
            particles,
            particles_shown: !pose.particles.is_empty(),
            glows,
        })
    }

    pub fn apply(&mut self, pose: &KatanaPose) {
        _ = self.svg.set_attribute("style", &scene::tilt_style(&pose.tilt));
        _ = self.assembly.set_attribute(
            "transform",
            &scene::assembly_transform(pose.assembly_rotation_deg),
        );
        for (part, el) in &self.parts {
            if let Some(t) = part.transform(pose) {
                _ = el.set_attribute("transform", &scene::svg_transform(t));
                _ = el.set_attribute("opacity", &scene::num(t.opacity));
            }
        }

        let show = !pose.particles.is_empty();
        if show {
            self.particles
                .set_inner_html(&scene::particles_markup(&pose.particles));
        } else if self.particles_shown {
            self.particles.set_inner_html("");
        }
        self.particles_shown = show;
    }

    pub fn apply_backdrop(&self, pointer: PointerSignal) {
        for (el, offset) in self.glows.iter().zip(backdrop::glow_offsets(pointer)) {
            dom::set_style(el, "transform", &backdrop::glow_transform(offset));
        }
    }
}

impl Drop for SceneView {
    fn drop(&mut self) {
        self.host.set_inner_html("");
    }
}
