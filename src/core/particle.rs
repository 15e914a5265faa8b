use super::config::{Hsl, Preset};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One soft glow ("blob").
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Logical pixels per frame.
    pub velocity: Vec2,
    pub base_radius: f32,
    pub color: Hsl,
    /// Offset in [0, 2pi) that decorrelates oscillation and drift.
    pub phase: f32,
}

/// Ordered particle collection. Store order is draw order.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// Replaces the whole store with freshly seeded particles sized for a
    /// `width x height` viewport.
    pub fn initialize<R: Rng>(
        &mut self,
        preset: &Preset,
        width: f32,
        height: f32,
        rng: &mut R,
    ) {
        let count = preset.count.count(width, height);
        self.particles = (0..count)
            .map(|_| spawn_particle(preset, width, height, &mut *rng))
            .collect();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

fn spawn_particle<R: Rng>(preset: &Preset, width: f32, height: f32, rng: &mut R) -> Particle {
    let base_radius = preset.radius_min + rng.gen::<f32>() * preset.radius_span;
    let mut color = preset
        .palette
        .choose(rng)
        .copied()
        .unwrap_or(Hsl::new(0.0, 0.0, 100.0));
    if preset.hue_jitter > 0.0 {
        color.h += (rng.gen::<f32>() * 2.0 - 1.0) * preset.hue_jitter;
    }
    let position = Vec2::new(
        preset.spawn.sample(width, rng.gen()),
        preset.spawn.sample(height, rng.gen()),
    );
    let velocity = Vec2::new(
        (rng.gen::<f32>() * 2.0 - 1.0) * preset.initial_speed,
        (rng.gen::<f32>() * 2.0 - 1.0) * preset.initial_speed,
    );
    Particle {
        position,
        velocity,
        base_radius,
        color,
        phase: rng.gen::<f32>() * TAU,
    }
}
