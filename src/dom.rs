use crate::constants::{SEED_ATTRIBUTE, VARIANT_ATTRIBUTE};
use crate::core::{FieldConfig, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport {
        width: px(window.inner_width()),
        height: px(window.inner_height()),
        pixel_ratio: window.device_pixel_ratio() as f32,
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// `None` until the browser hands out a 2D context.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Backing store in physical pixels, CSS box in logical pixels.
pub fn apply_surface(canvas: &web::HtmlCanvasElement, surface: &Surface) {
    canvas.set_width(surface.backing_width);
    canvas.set_height(surface.backing_height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", surface.width));
    _ = style.set_property("height", &format!("{}px", surface.height));
}

/// Reads `data-variant` / `data-seed`, falling back to defaults on bad input.
pub fn read_field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let variant = canvas.get_attribute(VARIANT_ATTRIBUTE);
    let seed = canvas.get_attribute(SEED_ATTRIBUTE);
    match FieldConfig::from_attributes(variant.as_deref(), seed.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldConfig::default()
        }
    }
}
