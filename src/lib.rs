#![cfg(target_arch = "wasm32")]
use crate::core::{Field, FieldConfig, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas2d;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;

use events::Listener;
use frame::{FrameContext, FrameLoop};

/// A field attached to a canvas. Dropping it stops the loop first, then
/// detaches the listeners.
struct Mounted {
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
    variant: Variant,
}

impl Mounted {
    fn mount(canvas: web::HtmlCanvasElement, config: FieldConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let preset = config.variant.preset();
        let mut field = match config.seed {
            Some(seed) => Field::new(preset, seed),
            None => Field::from_entropy(preset),
        };
        let vp = dom::viewport(&window);
        field.resize(vp.width, vp.height, vp.pixel_ratio);
        dom::apply_surface(&canvas, field.surface());
        log::info!(
            "[mount] {} field {}x{} @{} with {} particles",
            config.variant,
            vp.width,
            vp.height,
            vp.pixel_ratio,
            field.particles().len()
        );

        let field = Rc::new(RefCell::new(field));
        let mut listeners = events::wire_pointer(&window, &field)?;
        listeners.push(events::wire_resize(&window, &canvas, &field)?);
        let frame_loop = FrameLoop::start(FrameContext::new(field, canvas));

        Ok(Self {
            frame_loop,
            listeners,
            variant: config.variant,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        log::info!("[unmount] {} field torn down", self.variant);
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

/// Handle for pages that control the field's lifetime themselves.
#[wasm_bindgen]
#[derive(Default)]
pub struct AmbientField {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl AmbientField {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts onto the canvas with `canvas_id`. `variant` overrides the
    /// element's `data-variant`. Any previous mount is torn down first.
    pub fn mount(&mut self, canvas_id: &str, variant: Option<String>) -> Result<(), JsValue> {
        self.unmount();
        let mounted = mount_by_id(canvas_id, variant.as_deref())
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        self.mounted = Some(mounted);
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.mounted.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.frame_loop.is_running())
    }
}

fn mount_by_id(canvas_id: &str, variant: Option<&str>) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let mut config = dom::read_field_config(&canvas);
    if let Some(v) = variant {
        config.variant = v.parse()?;
    }
    Mounted::mount(canvas, config)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-field starting");

    if let Err(e) = auto_mount() {
        log::error!("auto-mount error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document
        .get_element_by_id(constants::CANVAS_ELEMENT_ID)
        .is_none()
    {
        log::info!(
            "no #{} element; waiting for AmbientField.mount",
            constants::CANVAS_ELEMENT_ID
        );
        return Ok(());
    }
    let mounted = mount_by_id(constants::CANVAS_ELEMENT_ID, None)?;
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted));
    Ok(())
}

/// Tears down the field the start hook mounted, if any.
#[wasm_bindgen]
pub fn teardown() {
    let mounted = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(mounted);
}
