// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Layout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Plot area of a layout: the surface inset by the padding.
    pub fn from_layout(layout: &Layout) -> Self {
        let p = layout.padding as f32;
        Self::from_ltrb(p, p, layout.width as f32 - p, layout.height as f32 - p)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Top-left corner that keeps a `w` x `h` box anchored at `(x, y)` inside `[0, max_w] x [0, max_h]`.
pub fn fit_box(x: f32, y: f32, w: f32, h: f32, max_w: f32, max_h: f32) -> (f32, f32) {
    (clamp(x, 0.0, (max_w - w).max(0.0)), clamp(y, 0.0, (max_h - h).max(0.0)))
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
