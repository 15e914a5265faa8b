// Tuning constants for the two ambient field presets.
//
// Velocities are in logical pixels per frame, distances in logical pixels,
// frequencies in radians per second of elapsed time.

// ---------------- Lava lamp ----------------

// Particle count = clamp(round(area / divisor), min, max)
pub const LAVA_AREA_PER_BLOB: f32 = 160_000.0;
pub const LAVA_MIN_BLOBS: usize = 6;
pub const LAVA_MAX_BLOBS: usize = 10;

// Spawn window as fractions of each axis
pub const LAVA_SPAWN_MIN: f32 = 0.25;
pub const LAVA_SPAWN_SPAN: f32 = 0.5;
pub const LAVA_INITIAL_SPEED: f32 = 0.075; // symmetric, per component

pub const LAVA_RADIUS_MIN: f32 = 120.0;
pub const LAVA_RADIUS_SPAN: f32 = 140.0;
pub const LAVA_HUE_JITTER: f32 = 4.0; // +- degrees

// periwinkle, lavender, mint, peach, orchid
pub const LAVA_HUES: [f32; 5] = [205.0, 270.0, 140.0, 18.0, 320.0];
pub const LAVA_SATURATION: f32 = 60.0;
pub const LAVA_LIGHTNESS: f32 = 60.0;

pub const LAVA_DRIFT_FREQ_X: f32 = 0.15;
pub const LAVA_DRIFT_FREQ_Y: f32 = 0.18;
pub const LAVA_DRIFT_ACCEL: f32 = 0.12 * 0.02;

pub const LAVA_POINTER_REACH: f32 = 160.0;
pub const LAVA_POINTER_STRENGTH: f32 = 0.08;

pub const LAVA_DAMPING: f32 = 0.985;
pub const LAVA_RESTITUTION: f32 = 0.9;

// Background gradient, top and bottom stops as HSL
pub const LAVA_BACKGROUND_TOP: [f32; 3] = [28.0, 50.0, 95.0];
pub const LAVA_BACKGROUND_BOTTOM: [f32; 3] = [210.0, 45.0, 90.0];

// Drawn radius = base * (OSC_BASE + OSC_AMPLITUDE * sin(t * OSC_FREQ + phase))
pub const LAVA_OSC_BASE: f32 = 0.82;
pub const LAVA_OSC_AMPLITUDE: f32 = 0.18;
pub const LAVA_OSC_FREQ: f32 = 0.8;

// ---------------- Pastel ----------------

pub const PASTEL_BLOB_COUNT: usize = 45;
pub const PASTEL_SPAWN_WINDOW: f32 = 0.4; // centered, fraction of each axis
pub const PASTEL_INITIAL_SPEED: f32 = 0.1;

pub const PASTEL_RADIUS_MIN: f32 = 80.0;
pub const PASTEL_RADIUS_SPAN: f32 = 120.0;

// #ffadad #ffd6a5 #fdffb6 #caffbf #9bf6ff #a0c4ff #bdb2ff #ffc6ff as HSL
pub const PASTEL_COLORS: [[f32; 3]; 8] = [
    [0.0, 100.0, 83.9],
    [32.7, 100.0, 82.4],
    [61.6, 100.0, 85.7],
    [109.7, 100.0, 87.5],
    [185.4, 100.0, 80.4],
    [217.3, 100.0, 81.4],
    [248.6, 100.0, 84.9],
    [300.0, 100.0, 88.8],
];

pub const PASTEL_BACKGROUND_TOP: [f32; 3] = [40.0, 60.0, 97.0];
pub const PASTEL_BACKGROUND_BOTTOM: [f32; 3] = [260.0, 40.0, 94.0];

pub const PASTEL_REPEL_RANGE: f32 = 200.0;
pub const PASTEL_REPEL_STRENGTH: f32 = 0.3;

pub const PASTEL_DAMPING: f32 = 0.98;
pub const PASTEL_RESTITUTION: f32 = 1.0;

// ---------------- Shared ----------------

// Pointer distances below this are treated as this (no division by zero)
pub const MIN_POINTER_DISTANCE: f32 = 1.0;

pub const GLOW_CORE_ALPHA: f32 = 0.65;
