// Logical vs. physical size of the drawing target.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// CSS pixels.
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
    /// Physical pixels of the backing store.
    pub backing_width: u32,
    pub backing_height: u32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
            backing_width: 0,
            backing_height: 0,
        }
    }
}

impl Surface {
    pub fn new(viewport_width: f32, viewport_height: f32, pixel_ratio: f32) -> Self {
        let mut s = Self::default();
        s.configure(viewport_width, viewport_height, pixel_ratio);
        s
    }

    /// Sets the logical size to the viewport and the backing store to
    /// `round(size * ratio)`.
    pub fn configure(&mut self, viewport_width: f32, viewport_height: f32, pixel_ratio: f32) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        self.width = sanitize_extent(viewport_width);
        self.height = sanitize_extent(viewport_height);
        self.pixel_ratio = ratio;
        self.backing_width = (self.width * ratio).round() as u32;
        self.backing_height = (self.height * ratio).round() as u32;
    }

    /// Zero-sized surfaces have nothing to simulate or draw.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
