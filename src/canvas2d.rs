use crate::core::{BlendMode, Canvas, ColorStop, RenderError};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Canvas`] backed by a browser 2D context.
pub struct Canvas2d<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> Canvas2d<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) -> Result<(), RenderError> {
        for stop in stops {
            gradient
                .add_color_stop(stop.offset, &stop.color)
                .map_err(js_err("addColorStop"))?;
        }
        Ok(())
    }
}

fn js_err(op: &'static str) -> impl Fn(JsValue) -> RenderError {
    move |e| RenderError::canvas(op, format!("{:?}", e))
}

impl Canvas for Canvas2d<'_> {
    fn begin(&mut self, pixel_ratio: f32) -> Result<(), RenderError> {
        self.ctx.save();
        let r = pixel_ratio as f64;
        self.ctx
            .set_transform(r, 0.0, 0.0, r, 0.0, 0.0)
            .map_err(js_err("setTransform"))
    }

    fn fill_vertical_gradient(&mut self, size: Vec2, top: &str, bottom: &str) -> Result<(), RenderError> {
        let (w, h) = (size.x as f64, size.y as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        gradient
            .add_color_stop(0.0, top)
            .map_err(js_err("addColorStop"))?;
        gradient
            .add_color_stop(1.0, bottom)
            .map_err(js_err("addColorStop"))?;
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), RenderError> {
        self.ctx
            .set_global_composite_operation(mode.as_css())
            .map_err(js_err("globalCompositeOperation"))
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) -> Result<(), RenderError> {
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, r)
            .map_err(js_err("createRadialGradient"))?;
        Self::add_stops(&gradient, stops)?;
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, r, 0.0, TAU)
            .map_err(js_err("arc"))?;
        self.ctx.fill();
        Ok(())
    }

    fn end(&mut self) {
        self.ctx.restore();
    }
}
