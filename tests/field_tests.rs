// Host-side tests for particle seeding and the per-frame integrator.

#![allow(dead_code)]
mod common;

use common::core::config::*;
use common::core::field::*;
use common::core::particle::*;
use common::RecordingCanvas;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn lava_count(w: f32, h: f32) -> usize {
    ((w * h / 160_000.0).round() as usize).clamp(6, 10)
}

fn particle_at(position: Vec2, velocity: Vec2, radius: f32) -> Particle {
    Particle {
        position,
        velocity,
        base_radius: radius,
        color: Hsl::new(205.0, 60.0, 60.0),
        phase: 0.0,
    }
}

#[test]
fn lava_count_follows_viewport_area() {
    let sizes = [
        (320.0, 568.0),
        (375.0, 667.0),
        (768.0, 1024.0),
        (1280.0, 800.0),
        (1366.0, 768.0),
        (1440.0, 900.0),
        (1600.0, 900.0),
        (1920.0, 1080.0),
        (2560.0, 1440.0),
    ];
    let preset = Preset::lava_lamp();
    let mut rng = StdRng::seed_from_u64(1);
    let mut store = ParticleStore::default();
    for (w, h) in sizes {
        store.initialize(&preset, w, h, &mut rng);
        assert_eq!(store.len(), lava_count(w, h), "count for {w}x{h}");
    }
    assert_eq!(lava_count(375.0, 667.0), 6);
    assert_eq!(lava_count(1440.0, 900.0), 8);
    assert_eq!(lava_count(1920.0, 1080.0), 10);
}

#[test]
fn pastel_count_is_fixed() {
    let preset = Preset::pastel();
    let mut rng = StdRng::seed_from_u64(2);
    let mut store = ParticleStore::default();
    for (w, h) in [(320.0, 568.0), (1200.0, 800.0), (3840.0, 2160.0)] {
        store.initialize(&preset, w, h, &mut rng);
        assert_eq!(store.len(), 45);
    }
}

#[test]
fn lava_particles_spawn_in_middle_band() {
    let preset = Preset::lava_lamp();
    let mut rng = StdRng::seed_from_u64(3);
    let mut store = ParticleStore::default();
    let (w, h) = (1600.0, 1000.0);
    store.initialize(&preset, w, h, &mut rng);
    for p in &store {
        assert!(p.position.x >= 0.25 * w && p.position.x <= 0.75 * w);
        assert!(p.position.y >= 0.25 * h && p.position.y <= 0.75 * h);
        assert!(p.velocity.x.abs() <= 0.075 && p.velocity.y.abs() <= 0.075);
        assert!(p.base_radius >= 120.0 && p.base_radius <= 260.0);
        assert!(p.phase >= 0.0 && p.phase <= TAU);
        let near_palette = preset.palette.iter().any(|c| (c.h - p.color.h).abs() <= 4.0);
        assert!(near_palette, "hue {} not near the palette", p.color.h);
    }
}

#[test]
fn pastel_particles_spawn_in_central_window() {
    let preset = Preset::pastel();
    let mut rng = StdRng::seed_from_u64(4);
    let mut store = ParticleStore::default();
    let (w, h) = (1200.0, 800.0);
    store.initialize(&preset, w, h, &mut rng);
    for p in &store {
        assert!((p.position.x - w / 2.0).abs() <= 0.2 * w + 1e-3);
        assert!((p.position.y - h / 2.0).abs() <= 0.2 * h + 1e-3);
        assert!(p.velocity.x.abs() <= 0.1 && p.velocity.y.abs() <= 0.1);
        assert!(p.base_radius >= 80.0 && p.base_radius <= 200.0);
        assert!(preset.palette.contains(&p.color));
    }
}

#[test]
fn resize_replaces_every_particle() {
    let mut field = Field::new(Preset::lava_lamp(), 5);
    field.resize(1920.0, 1080.0, 1.0);
    let before: Vec<Particle> = field.particles().iter().cloned().collect();
    field.resize(800.0, 600.0, 2.0);
    let after = field.particles();

    assert_eq!(before.len(), 10);
    assert_eq!(after.len(), lava_count(800.0, 600.0));
    for (old, new) in before.iter().zip(after.iter()) {
        assert_ne!(old.position, new.position);
    }
    for p in after {
        assert!(p.position.x <= 0.75 * 800.0 && p.position.y <= 0.75 * 600.0);
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let mut a = Field::new(Preset::pastel(), 99);
    let mut b = Field::new(Preset::pastel(), 99);
    a.resize(1024.0, 768.0, 1.0);
    b.resize(1024.0, 768.0, 1.0);
    assert_eq!(a.particles().as_slice(), b.particles().as_slice());
}

#[test]
fn damping_alone_decays_speed() {
    let mut preset = Preset::lava_lamp();
    preset.drift = Drift::NONE;
    let bounds = Vec2::new(100_000.0, 100_000.0);
    let mut p = particle_at(Vec2::new(50_000.0, 50_000.0), Vec2::new(0.2, -0.15), 100.0);

    let mut prev = p.velocity.length();
    for frame in 0..600 {
        step_particle(&preset, &mut p, frame as f32 / 60.0, None, bounds);
        let speed = p.velocity.length();
        assert!(speed <= prev, "speed grew at frame {frame}");
        prev = speed;
    }
    assert!(prev < 1e-4);
}

#[test]
fn pastel_has_no_ambient_drift() {
    let preset = Preset::pastel();
    for t in [0.0, 1.0, 17.5] {
        assert_eq!(drift_accel(&preset, t, 1.3), Vec2::ZERO);
    }
    let lava = Preset::lava_lamp();
    let a = drift_accel(&lava, 2.0, 0.4);
    assert!(a.length() > 0.0 && a.length() <= 0.12 * 0.02 * 2f32.sqrt());
}

#[test]
fn lava_pointer_pulls_toward_pointer() {
    let preset = Preset::lava_lamp();
    let pos = Vec2::new(100.0, 100.0);
    let pointer = Vec2::new(400.0, 500.0);
    let a = pointer_accel(&preset, pos, Some(pointer));
    assert!(a.dot(pointer - pos) > 0.0);
    assert!((a.length() - 160.0 / 500.0 * 0.08).abs() < 1e-6);

    // Inside the reach the pull saturates.
    let close = pointer_accel(&preset, pos, Some(pos + Vec2::new(50.0, 0.0)));
    assert!((close.length() - 0.08).abs() < 1e-6);
}

#[test]
fn pastel_pointer_repels_within_range() {
    let preset = Preset::pastel();
    let pos = Vec2::new(300.0, 300.0);
    let pointer = Vec2::new(360.0, 380.0); // 100px away
    let a = pointer_accel(&preset, pos, Some(pointer));
    assert!(a.dot(pointer - pos) < 0.0);
    assert!((a.length() - 0.15).abs() < 1e-6);

    let edge = pointer_accel(&preset, pos, Some(pos + Vec2::new(200.0, 0.0)));
    assert_eq!(edge, Vec2::ZERO);
    let outside = pointer_accel(&preset, pos, Some(pos + Vec2::new(0.0, 450.0)));
    assert_eq!(outside, Vec2::ZERO);
}

#[test]
fn pointer_force_grows_as_distance_shrinks() {
    for preset in [Preset::lava_lamp(), Preset::pastel()] {
        let mut prev = 0.0f32;
        for d in (1..=400).rev() {
            let m = preset.pointer.magnitude(d as f32).abs();
            assert!(m >= prev, "{} force dropped at d={d}", preset.variant);
            prev = m;
        }
    }
}

#[test]
fn pointer_on_particle_is_finite() {
    for preset in [Preset::lava_lamp(), Preset::pastel()] {
        let pos = Vec2::new(10.0, 10.0);
        let a = pointer_accel(&preset, pos, Some(pos));
        assert!(a.is_finite());
        assert_eq!(a, Vec2::ZERO);
    }
}

#[test]
fn lava_bounce_flips_and_damps_velocity() {
    let mut preset = Preset::lava_lamp();
    preset.drift = Drift::NONE;
    let bounds = Vec2::new(1000.0, 1000.0);

    let mut p = particle_at(Vec2::new(100.5, 500.0), Vec2::new(-2.0, 0.0), 100.0);
    step_particle(&preset, &mut p, 0.0, None, bounds);
    let expected = 2.0 * 0.985 * 0.9;
    assert!((p.velocity.x - expected).abs() < 1e-5);

    let mut p = particle_at(Vec2::new(500.0, 899.5), Vec2::new(0.0, 2.0), 100.0);
    step_particle(&preset, &mut p, 0.0, None, bounds);
    assert!(p.velocity.y < 0.0);
    assert!((p.velocity.y + expected).abs() < 1e-5);

    // Already heading back inside: left alone.
    let mut p = particle_at(Vec2::new(50.0, 500.0), Vec2::new(1.0, 0.0), 100.0);
    step_particle(&preset, &mut p, 0.0, None, bounds);
    assert!(p.velocity.x > 0.0);
}

#[test]
fn pastel_bounce_clamps_inside() {
    let preset = Preset::pastel();
    let bounds = Vec2::new(800.0, 600.0);

    let mut p = particle_at(Vec2::new(81.0, 300.0), Vec2::new(-3.0, 0.0), 80.0);
    step_particle(&preset, &mut p, 0.0, None, bounds);
    assert_eq!(p.position.x, 80.0);
    assert!((p.velocity.x - 3.0 * 0.98).abs() < 1e-5);

    let mut p = particle_at(Vec2::new(400.0, 519.0), Vec2::new(0.0, 3.0), 80.0);
    step_particle(&preset, &mut p, 0.0, None, bounds);
    assert_eq!(p.position.y, 520.0);
    assert!(p.velocity.y < 0.0);
}

#[test]
fn lava_stays_contained_for_300_frames() {
    let (w, h) = (1200.0, 800.0);
    let mut field = Field::new(Preset::lava_lamp(), 2024);
    field.resize(w, h, 1.0);
    let mut canvas = RecordingCanvas::default();

    for frame in 0..300 {
        let outcome = field
            .frame(frame as f64 * FRAME_MS, &mut canvas)
            .expect("render on a valid surface");
        assert_eq!(outcome, FrameOutcome::Drawn);
        for p in field.particles() {
            let r = p.base_radius;
            assert!(
                p.position.x >= -r && p.position.x <= w + r,
                "x escaped at frame {frame}"
            );
            assert!(
                p.position.y >= -r && p.position.y <= h + r,
                "y escaped at frame {frame}"
            );
        }
    }
}

#[test]
fn pastel_stays_inside_even_when_pushed() {
    let (w, h) = (1200.0, 800.0);
    let mut field = Field::new(Preset::pastel(), 11);
    field.resize(w, h, 2.0);
    field.set_pointer(Vec2::new(w / 2.0, h / 2.0));
    for frame in 0..300 {
        if frame == 120 {
            field.clear_pointer();
        }
        field.step(frame as f32 / 60.0);
        for p in field.particles() {
            let r = p.base_radius;
            assert!(p.position.x - r >= -1e-3 && p.position.x + r <= w + 1e-3);
            assert!(p.position.y - r >= -1e-3 && p.position.y + r <= h + 1e-3);
        }
    }
}

fn run_pointer_window(preset: Preset, seed: u64, toward: bool) {
    let (w, h) = (1200.0, 800.0);
    let center = Vec2::new(w / 2.0, h / 2.0);
    let mut field = Field::new(preset, seed);
    field.resize(w, h, 1.0);
    field.set_pointer(center);

    let expected_way = |along: f32| if toward { along > 0.0 } else { along < 0.0 };
    let mut saw_pointer_force = false;
    let mut saw_velocity = false;
    for frame in 0..60 {
        for p in field.particles() {
            let a = pointer_accel(field.preset(), p.position, field.pointer());
            saw_pointer_force |= expected_way(a.dot(center - p.position));
        }
        field.step(frame as f32 / 60.0);
        saw_velocity |= field
            .particles()
            .iter()
            .any(|p| expected_way(p.velocity.dot(center - p.position)));
    }
    assert!(saw_pointer_force);
    assert!(saw_velocity);

    field.clear_pointer();
    assert_eq!(field.pointer(), None);
    let preset = field.preset().clone();
    for p in field.particles() {
        assert_eq!(pointer_accel(&preset, p.position, field.pointer()), Vec2::ZERO);
        let mut copy = p.clone();
        let push = step_particle(&preset, &mut copy, 1.0, None, Vec2::new(w, h));
        assert_eq!(push, Vec2::ZERO);
    }
}

#[test]
fn lava_pointer_window_then_release() {
    run_pointer_window(Preset::lava_lamp(), 8, true);
}

#[test]
fn pastel_pointer_window_then_release() {
    run_pointer_window(Preset::pastel(), 8, false);
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut field = Field::new(Preset::lava_lamp(), 1);
    field.set_pointer(Vec2::new(f32::NAN, 3.0));
    assert_eq!(field.pointer(), None);
    field.set_pointer(Vec2::new(4.0, 3.0));
    assert_eq!(field.pointer(), Some(Vec2::new(4.0, 3.0)));
}

#[test]
fn unsized_field_skips_frames() {
    let mut field = Field::new(Preset::pastel(), 1);
    let mut canvas = RecordingCanvas::default();
    let outcome = field.frame(16.0, &mut canvas).unwrap();
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert!(canvas.ops.is_empty());

    field.resize(0.0, 600.0, 1.0);
    let outcome = field.frame(32.0, &mut canvas).unwrap();
    assert_eq!(outcome, FrameOutcome::Skipped);
}
