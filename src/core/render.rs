// Frame painting against an abstract 2D canvas.

use super::config::{BlendMode, Hsl, Preset};
use super::particle::{Particle, ParticleStore};
use super::surface::Surface;
use glam::Vec2;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("canvas rejected `{op}`: {detail}")]
    Canvas { op: &'static str, detail: String },
}

impl RenderError {
    pub fn canvas(op: &'static str, detail: impl Into<String>) -> Self {
        RenderError::Canvas {
            op,
            detail: detail.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: String,
}

pub type GlowStops = SmallVec<[ColorStop; 4]>;

/// The drawing operations a frame needs. Coordinates are logical pixels;
/// `begin` installs the pixel-ratio scale and `end` undoes it.
pub trait Canvas {
    fn begin(&mut self, pixel_ratio: f32) -> Result<(), RenderError>;
    fn fill_vertical_gradient(&mut self, size: Vec2, top: &str, bottom: &str) -> Result<(), RenderError>;
    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), RenderError>;
    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) -> Result<(), RenderError>;
    fn end(&mut self);
}

/// Background, additive glows in store order, then back to `source-over`.
pub fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    preset: &Preset,
    surface: &Surface,
    particles: &ParticleStore,
    t: f32,
) -> Result<(), RenderError> {
    canvas.begin(surface.pixel_ratio)?;
    let result = paint(canvas, preset, surface, particles, t);
    canvas.end();
    result
}

fn paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    preset: &Preset,
    surface: &Surface,
    particles: &ParticleStore,
    t: f32,
) -> Result<(), RenderError> {
    let bg = &preset.background;
    canvas.fill_vertical_gradient(surface.size(), &bg.top.css(1.0), &bg.bottom.css(1.0))?;

    canvas.set_blend_mode(preset.blend)?;
    let glows = paint_glows(canvas, preset, particles, t);
    // Always restore, even when a glow failed, so the blend mode never leaks.
    let restored = canvas.set_blend_mode(BlendMode::SourceOver);
    glows.and(restored)
}

fn paint_glows<C: Canvas + ?Sized>(
    canvas: &mut C,
    preset: &Preset,
    particles: &ParticleStore,
    t: f32,
) -> Result<(), RenderError> {
    for p in particles {
        let radius = preset.drawn_radius(p.base_radius, t, p.phase);
        if !(radius.is_finite() && radius > 0.0) || !p.position.is_finite() {
            continue;
        }
        canvas.fill_glow(p.position, radius, &glow_stops(preset, p))?;
    }
    Ok(())
}

/// Color stops of one particle's radial gradient, center first.
pub fn glow_stops(preset: &Preset, p: &Particle) -> GlowStops {
    preset
        .glow_stops
        .iter()
        .map(|s| ColorStop {
            offset: s.offset.clamp(0.0, 1.0),
            color: Hsl::new(p.color.h + s.hue_shift, p.color.s, p.color.l + s.lightness_shift)
                .css(s.alpha),
        })
        .collect()
}
