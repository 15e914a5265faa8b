use super::Listener;
use crate::core::Field;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Resize reconfigures the surface and replaces every particle.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<Field>>,
) -> anyhow::Result<Listener> {
    let window_for_cb = window.clone();
    let canvas = canvas.clone();
    let field = field.clone();
    Listener::attach(window, "resize", move |_ev: web::Event| {
        let vp = dom::viewport(&window_for_cb);
        let mut f = field.borrow_mut();
        f.resize(vp.width, vp.height, vp.pixel_ratio);
        dom::apply_surface(&canvas, f.surface());
        log::info!(
            "[resize] {}x{} @{} -> {} particles",
            vp.width,
            vp.height,
            vp.pixel_ratio,
            f.particles().len()
        );
    })
}
