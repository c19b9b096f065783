// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants and the plot layout consumed by the scale builder.

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;
/// Uniform padding between the surface edge and the plot area, in pixels.
pub const PADDING: u32 = 60;
/// Default dot radius in pixels.
pub const DOT_RADIUS: f32 = 7.5;

/// Duration in whole milliseconds.
pub type Millis = u64;

/// Surface size and padding. The plot area is the surface inset by `padding` on every side.
/// Contract: `width` and `height` are both greater than `2 * padding`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Layout {
    pub const fn new(width: u32, height: u32, padding: u32) -> Self {
        Self { width, height, padding }
    }
    /// Horizontal pixel range `[padding, width - padding]`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.padding as f64, self.width as f64 - self.padding as f64)
    }
    /// Whether any plot area is left once the padding is taken off both sides.
    pub fn has_plot_area(&self) -> bool {
        let inset = self.padding.saturating_mul(2);
        self.width > inset && self.height > inset
    }
    /// Vertical pixel range `[height - padding, padding]` (bottom first).
    pub fn y_range(&self) -> (f64, f64) {
        (self.height as f64 - self.padding as f64, self.padding as f64)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}
