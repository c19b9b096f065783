// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for the scatter chart colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub doping: skia::Color,
    pub no_doping: skia::Color,
    pub dot_stroke: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            doping: skia::Color::from_argb(255, 255, 140, 50),
            no_doping: skia::Color::from_argb(255, 64, 160, 255),
            dot_stroke: skia::Color::from_argb(255, 230, 230, 235),
            tooltip_fill: skia::Color::from_argb(230, 40, 40, 48),
            tooltip_text: skia::Color::from_argb(255, 240, 240, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            doping: skia::Color::from_argb(255, 230, 110, 20),
            no_doping: skia::Color::from_argb(255, 32, 120, 200),
            dot_stroke: skia::Color::from_argb(255, 30, 30, 40),
            tooltip_fill: skia::Color::from_argb(235, 255, 255, 230),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            doping: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            no_doping: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            dot_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_fill: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }

    /// Dot fill for a record with or without an allegation.
    pub fn dot_fill(&self, doping: bool) -> skia::Color {
        if doping { self.doping } else { self.no_doping }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
