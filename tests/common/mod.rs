// The library is wasm-only, so host tests include the pure core modules
// directly and rebuild the `core` module tree here.

#![allow(dead_code)]

pub mod core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod particle {
        include!("../../src/core/particle.rs");
    }
    pub mod render {
        include!("../../src/core/render.rs");
    }
    pub mod scheduler {
        include!("../../src/core/scheduler.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
}

use self::core::config::BlendMode;
use self::core::render::{Canvas, ColorStop, RenderError};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Begin(f32),
    Background { size: Vec2, top: String, bottom: String },
    Blend(BlendMode),
    Glow { center: Vec2, radius: f32, stops: Vec<ColorStop> },
    End,
}

/// Records every call; optionally fails the n-th glow.
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub fail_glow_at: Option<usize>,
    pub glow_calls: usize,
}

impl RecordingCanvas {
    pub fn glows(&self) -> Vec<(Vec2, f32, Vec<ColorStop>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Glow {
                    center,
                    radius,
                    stops,
                } => Some((*center, *radius, stops.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn begin(&mut self, pixel_ratio: f32) -> Result<(), RenderError> {
        self.ops.push(Op::Begin(pixel_ratio));
        Ok(())
    }

    fn fill_vertical_gradient(&mut self, size: Vec2, top: &str, bottom: &str) -> Result<(), RenderError> {
        self.ops.push(Op::Background {
            size,
            top: top.to_string(),
            bottom: bottom.to_string(),
        });
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), RenderError> {
        self.ops.push(Op::Blend(mode));
        Ok(())
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) -> Result<(), RenderError> {
        let idx = self.glow_calls;
        self.glow_calls += 1;
        if self.fail_glow_at == Some(idx) {
            return Err(RenderError::canvas("createRadialGradient", "IndexSizeError"));
        }
        self.ops.push(Op::Glow {
            center,
            radius,
            stops: stops.to_vec(),
        });
        Ok(())
    }

    fn end(&mut self) {
        self.ops.push(Op::End);
    }
}
