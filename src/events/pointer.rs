use super::Listener;
use crate::constants::{POINTER_CLEAR_EVENTS, POINTER_SET_EVENTS};
use crate::core::Field;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Move/down overwrite the field's pointer sample; up/cancel/leave clear it.
pub fn wire_pointer(window: &web::Window, field: &Rc<RefCell<Field>>) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(POINTER_SET_EVENTS.len() + POINTER_CLEAR_EVENTS.len());
    for kind in POINTER_SET_EVENTS {
        let field = field.clone();
        listeners.push(Listener::attach(window, kind, move |ev: web::Event| {
            if let Some(pos) = pointer_client_px(&ev) {
                field.borrow_mut().set_pointer(pos);
            }
        })?);
    }
    for kind in POINTER_CLEAR_EVENTS {
        let field = field.clone();
        listeners.push(Listener::attach(window, kind, move |_ev: web::Event| {
            field.borrow_mut().clear_pointer();
        })?);
    }
    Ok(listeners)
}

/// Viewport coordinates of a pointer event, which are also the field's
/// logical coordinates since the canvas covers the viewport.
#[inline]
fn pointer_client_px(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::PointerEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}
