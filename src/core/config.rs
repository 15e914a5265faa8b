use super::constants::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown field variant `{0}` (expected `lava-lamp` or `pastel`)")]
    UnknownVariant(String),
    #[error("invalid seed `{0}`: expected an unsigned integer")]
    InvalidSeed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    LavaLamp,
    Pastel,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::LavaLamp => "lava-lamp",
            Variant::Pastel => "pastel",
        }
    }

    pub fn preset(self) -> Preset {
        match self {
            Variant::LavaLamp => Preset::lava_lamp(),
            Variant::Pastel => Preset::pastel(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lava" | "lava-lamp" | "lavalamp" | "lava_lamp" => Ok(Variant::LavaLamp),
            "pastel" => Ok(Variant::Pastel),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// A color in CSS HSL terms: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    #[inline]
    pub const fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// `hsla(...)` string accepted by canvas color stops and fill styles.
    pub fn css(&self, alpha: f32) -> String {
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h,
            self.s.clamp(0.0, 100.0),
            self.l.clamp(0.0, 100.0),
            alpha.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountRule {
    /// One particle per `area_per_blob` square pixels, clamped to `[min, max]`.
    PerArea {
        area_per_blob: f32,
        min: usize,
        max: usize,
    },
    Fixed(usize),
}

impl CountRule {
    pub fn count(&self, width: f32, height: f32) -> usize {
        match *self {
            CountRule::PerArea {
                area_per_blob,
                min,
                max,
            } => {
                let n = (width * height / area_per_blob).round();
                if !n.is_finite() || n <= 0.0 {
                    return min;
                }
                (n as usize).clamp(min, max)
            }
            CountRule::Fixed(n) => n,
        }
    }
}

/// Where new particles are placed along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpawnRegion {
    /// `extent * (min + u * span)`
    Band { min: f32, span: f32 },
    /// A window of `window * extent` centered on the middle of the axis.
    Centered { window: f32 },
}

impl SpawnRegion {
    /// Maps a uniform sample `u` in [0, 1) to a coordinate on an axis of `extent` pixels.
    #[inline]
    pub fn sample(&self, extent: f32, u: f32) -> f32 {
        match *self {
            SpawnRegion::Band { min, span } => extent * (min + u * span),
            SpawnRegion::Centered { window } => extent * 0.5 + (u - 0.5) * extent * window,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub freq_x: f32,
    pub freq_y: f32,
    pub accel: f32,
}

impl Drift {
    pub const NONE: Drift = Drift {
        freq_x: 0.0,
        freq_y: 0.0,
        accel: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerForce {
    /// Pull toward the pointer with `min(1, reach / d) * strength`.
    Attract { reach: f32, strength: f32 },
    /// Push away within `range` with `(1 - d / range) * strength`.
    Repel { range: f32, strength: f32 },
}

impl PointerForce {
    /// Signed acceleration along the particle-to-pointer direction at
    /// distance `d`. Positive values pull toward the pointer.
    #[inline]
    pub fn magnitude(&self, d: f32) -> f32 {
        match *self {
            PointerForce::Attract { reach, strength } => (reach / d).min(1.0) * strength,
            PointerForce::Repel { range, strength } => {
                if d < range {
                    -(1.0 - d / range) * strength
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Oscillation {
    #[inline]
    pub fn factor(&self, t: f32, phase: f32) -> f32 {
        self.base + self.amplitude * (t * self.frequency + phase).sin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    Screen,
    Lighter,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
            BlendMode::Lighter => "lighter",
        }
    }
}

/// One stop of a particle's radial glow, relative to the particle's color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStop {
    pub offset: f32,
    pub hue_shift: f32,
    pub lightness_shift: f32,
    pub alpha: f32,
}

impl GlowStop {
    pub const fn new(offset: f32, hue_shift: f32, lightness_shift: f32, alpha: f32) -> Self {
        Self {
            offset,
            hue_shift,
            lightness_shift,
            alpha,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    pub top: Hsl,
    pub bottom: Hsl,
}

/// Everything that distinguishes one ambient field from another.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub variant: Variant,
    pub count: CountRule,
    pub spawn: SpawnRegion,
    pub initial_speed: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub palette: Vec<Hsl>,
    pub hue_jitter: f32,
    pub drift: Drift,
    pub pointer: PointerForce,
    pub damping: f32,
    pub restitution: f32,
    pub clamp_to_bounds: bool,
    pub oscillation: Option<Oscillation>,
    pub background: Background,
    pub blend: BlendMode,
    pub glow_stops: Vec<GlowStop>,
}

impl Preset {
    pub fn lava_lamp() -> Self {
        Self {
            variant: Variant::LavaLamp,
            count: CountRule::PerArea {
                area_per_blob: LAVA_AREA_PER_BLOB,
                min: LAVA_MIN_BLOBS,
                max: LAVA_MAX_BLOBS,
            },
            spawn: SpawnRegion::Band {
                min: LAVA_SPAWN_MIN,
                span: LAVA_SPAWN_SPAN,
            },
            initial_speed: LAVA_INITIAL_SPEED,
            radius_min: LAVA_RADIUS_MIN,
            radius_span: LAVA_RADIUS_SPAN,
            palette: LAVA_HUES
                .iter()
                .map(|&h| Hsl::new(h, LAVA_SATURATION, LAVA_LIGHTNESS))
                .collect(),
            hue_jitter: LAVA_HUE_JITTER,
            drift: Drift {
                freq_x: LAVA_DRIFT_FREQ_X,
                freq_y: LAVA_DRIFT_FREQ_Y,
                accel: LAVA_DRIFT_ACCEL,
            },
            pointer: PointerForce::Attract {
                reach: LAVA_POINTER_REACH,
                strength: LAVA_POINTER_STRENGTH,
            },
            damping: LAVA_DAMPING,
            restitution: LAVA_RESTITUTION,
            clamp_to_bounds: false,
            oscillation: Some(Oscillation {
                base: LAVA_OSC_BASE,
                amplitude: LAVA_OSC_AMPLITUDE,
                frequency: LAVA_OSC_FREQ,
            }),
            background: Background {
                top: Hsl::from_array(LAVA_BACKGROUND_TOP),
                bottom: Hsl::from_array(LAVA_BACKGROUND_BOTTOM),
            },
            blend: BlendMode::Screen,
            glow_stops: vec![
                GlowStop::new(0.0, 0.0, 0.0, GLOW_CORE_ALPHA),
                GlowStop::new(0.45, 8.0, 5.0, 0.42),
                GlowStop::new(0.9, 0.0, 10.0, 0.08),
                GlowStop::new(1.0, 0.0, 10.0, 0.0),
            ],
        }
    }

    pub fn pastel() -> Self {
        Self {
            variant: Variant::Pastel,
            count: CountRule::Fixed(PASTEL_BLOB_COUNT),
            spawn: SpawnRegion::Centered {
                window: PASTEL_SPAWN_WINDOW,
            },
            initial_speed: PASTEL_INITIAL_SPEED,
            radius_min: PASTEL_RADIUS_MIN,
            radius_span: PASTEL_RADIUS_SPAN,
            palette: PASTEL_COLORS.iter().copied().map(Hsl::from_array).collect(),
            hue_jitter: 0.0,
            drift: Drift::NONE,
            pointer: PointerForce::Repel {
                range: PASTEL_REPEL_RANGE,
                strength: PASTEL_REPEL_STRENGTH,
            },
            damping: PASTEL_DAMPING,
            restitution: PASTEL_RESTITUTION,
            clamp_to_bounds: true,
            oscillation: None,
            background: Background {
                top: Hsl::from_array(PASTEL_BACKGROUND_TOP),
                bottom: Hsl::from_array(PASTEL_BACKGROUND_BOTTOM),
            },
            blend: BlendMode::Lighter,
            glow_stops: vec![
                GlowStop::new(0.0, 0.0, 0.0, GLOW_CORE_ALPHA),
                GlowStop::new(0.5, 0.0, 0.0, 0.3),
                GlowStop::new(1.0, 0.0, 0.0, 0.0),
            ],
        }
    }

    /// Drawn radius for a particle at elapsed time `t`.
    #[inline]
    pub fn drawn_radius(&self, base_radius: f32, t: f32, phase: f32) -> f32 {
        match &self.oscillation {
            Some(osc) => base_radius * osc.factor(t, phase),
            None => base_radius,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Variant::default().preset()
    }
}

/// Runtime selection of a field, usually read from the host element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldConfig {
    pub variant: Variant,
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Builds a config from optional attribute values. Missing or empty
    /// values fall back to the defaults.
    pub fn from_attributes(variant: Option<&str>, seed: Option<&str>) -> Result<Self, ConfigError> {
        let variant = match variant.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse()?,
            None => Variant::default(),
        };
        let seed = match seed.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(
                s.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(s.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { variant, seed })
    }
}
