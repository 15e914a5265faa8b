// The simulation component: surface, particles, pointer sample and clock
// owned by one instance, advanced one frame at a time.

use super::config::{Preset, Variant};
use super::constants::MIN_POINTER_DISTANCE;
use super::particle::{Particle, ParticleStore};
use super::render::{self, Canvas, RenderError};
use super::scheduler::TimeBase;
use super::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Surface not ready; nothing simulated or drawn.
    Skipped,
    Drawn,
}

pub struct Field {
    preset: Preset,
    surface: Surface,
    particles: ParticleStore,
    pointer: Option<Vec2>,
    time: TimeBase,
    rng: StdRng,
}

impl Field {
    pub fn new(preset: Preset, seed: u64) -> Self {
        Self::with_rng(preset, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(preset: Preset) -> Self {
        Self::with_rng(preset, StdRng::from_entropy())
    }

    fn with_rng(preset: Preset, rng: StdRng) -> Self {
        Self {
            preset,
            surface: Surface::default(),
            particles: ParticleStore::default(),
            pointer: None,
            time: TimeBase::default(),
            rng,
        }
    }

    #[inline]
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.preset.variant
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Reconfigures the surface and reseeds every particle for the new size.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32, pixel_ratio: f32) {
        self.surface
            .configure(viewport_width, viewport_height, pixel_ratio);
        self.particles.initialize(
            &self.preset,
            self.surface.width,
            self.surface.height,
            &mut self.rng,
        );
        log::debug!(
            "[field] {} resized to {}x{} @{} ({} particles)",
            self.preset.variant,
            self.surface.width,
            self.surface.height,
            self.surface.pixel_ratio,
            self.particles.len()
        );
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        if position.is_finite() {
            self.pointer = Some(position);
        }
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Advances every particle by one frame at elapsed time `t` seconds.
    pub fn step(&mut self, t: f32) {
        if !self.surface.is_ready() {
            return;
        }
        let size = self.surface.size();
        for p in self.particles.iter_mut() {
            step_particle(&self.preset, p, t, self.pointer, size);
        }
    }

    /// Draws the current state without advancing it.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, t: f32) -> Result<(), RenderError> {
        render::render(canvas, &self.preset, &self.surface, &self.particles, t)
    }

    /// One scheduler tick: derive `t` from the host timestamp, step, draw.
    pub fn frame<C: Canvas + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        canvas: &mut C,
    ) -> Result<FrameOutcome, RenderError> {
        let t = self.time.elapsed_secs(timestamp_ms);
        if !self.surface.is_ready() {
            return Ok(FrameOutcome::Skipped);
        }
        self.step(t);
        self.render(canvas, t)?;
        Ok(FrameOutcome::Drawn)
    }
}

/// Ambient wandering acceleration for one particle.
#[inline]
pub fn drift_accel(preset: &Preset, t: f32, phase: f32) -> Vec2 {
    let d = &preset.drift;
    Vec2::new(
        (t * d.freq_x + phase).sin() * d.accel,
        (t * d.freq_y + phase).cos() * d.accel,
    )
}

/// Pointer acceleration for a particle at `position`. Zero without a sample.
#[inline]
pub fn pointer_accel(preset: &Preset, position: Vec2, pointer: Option<Vec2>) -> Vec2 {
    let Some(target) = pointer else {
        return Vec2::ZERO;
    };
    let delta = target - position;
    let dist = delta.length().max(MIN_POINTER_DISTANCE);
    let magnitude = preset.pointer.magnitude(dist);
    if magnitude == 0.0 {
        return Vec2::ZERO;
    }
    delta / dist * magnitude
}

/// Drift, pointer force, damping, integration, boundary bounce, in that order.
/// Returns the pointer acceleration that was applied.
pub fn step_particle(
    preset: &Preset,
    p: &mut Particle,
    t: f32,
    pointer: Option<Vec2>,
    bounds: Vec2,
) -> Vec2 {
    p.velocity += drift_accel(preset, t, p.phase);
    let push = pointer_accel(preset, p.position, pointer);
    p.velocity += push;
    p.velocity *= preset.damping;
    p.position += p.velocity;
    bounce(preset, p, bounds);
    push
}

/// Reflects the velocity off any edge the particle's disc has crossed while
/// still heading outward.
pub fn bounce(preset: &Preset, p: &mut Particle, bounds: Vec2) {
    let r = p.base_radius;
    let e = preset.restitution;
    let clamp = preset.clamp_to_bounds;

    if p.position.x - r < 0.0 && p.velocity.x < 0.0 {
        p.velocity.x *= -e;
        if clamp {
            p.position.x = r;
        }
    }
    if p.position.x + r > bounds.x && p.velocity.x > 0.0 {
        p.velocity.x *= -e;
        if clamp {
            p.position.x = bounds.x - r;
        }
    }
    if p.position.y - r < 0.0 && p.velocity.y < 0.0 {
        p.velocity.y *= -e;
        if clamp {
            p.position.y = r;
        }
    }
    if p.position.y + r > bounds.y && p.velocity.y > 0.0 {
        p.velocity.y *= -e;
        if clamp {
            p.position.y = bounds.y - r;
        }
    }
}
