// File: crates/chart-core/src/overlay.rs
// Summary: Tooltip and legend models plus the hover overlay handle passed to the render step.

use std::cell::RefCell;

use crate::plot::ScatterPlot;
use crate::record::NormalizedRecord;
use crate::types::DOT_RADIUS;

/// Vertical offset of the tooltip above the pointer, in pixels.
pub const TOOLTIP_OFFSET_Y: f64 = 100.0;

/// Text shown for a hovered record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub heading: String,
    pub detail: String,
    pub allegation: Option<String>,
    pub year: i32,
}

impl Tooltip {
    pub fn for_record(rec: &NormalizedRecord) -> Self {
        Self {
            heading: format!("{}: {}", rec.name(), rec.nationality()),
            detail: format!("Year: {}, Time: {}", rec.year(), rec.time()),
            allegation: rec.doping_allegation().map(str::to_string),
            year: rec.year(),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![self.heading.as_str(), self.detail.as_str()];
        if let Some(a) = &self.allegation { out.push(a.as_str()); }
        out
    }

    /// Markup for an HTML tooltip element, text escaped.
    pub fn to_html(&self) -> String {
        let base = format!("<div>{}</div><div>{}</div>", escape_html(&self.heading), escape_html(&self.detail));
        match &self.allegation {
            Some(a) => format!("{base}<br /><div>{}</div>", escape_html(a)),
            None => base,
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub doping: bool,
}

/// Fixed two-entry legend keyed on the doping flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Legend {
    pub entries: [LegendEntry; 2],
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            entries: [
                LegendEntry { label: "Doping Allegations", doping: true },
                LegendEntry { label: "No Doping Allegations", doping: false },
            ],
        }
    }
}

/// Pointer input in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayEvent {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
}

/// A visible tooltip and where to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipState {
    pub tooltip: Tooltip,
    pub anchor: (f64, f64),
    /// Index of the hovered record in the plot.
    pub index: usize,
}

/// Hover state for one chart. Owned by the caller and handed to the renderer explicitly.
#[derive(Debug)]
pub struct TooltipOverlay {
    hit_radius: f64,
    state: RefCell<Option<TooltipState>>,
}

impl TooltipOverlay {
    pub fn new() -> Self {
        Self::with_hit_radius(DOT_RADIUS as f64)
    }

    pub fn with_hit_radius(hit_radius: f64) -> Self {
        Self { hit_radius, state: RefCell::new(None) }
    }

    pub fn handle_event(&self, evt: &OverlayEvent, plot: &ScatterPlot) {
        let next = match *evt {
            OverlayEvent::PointerMove { x, y } => plot.hit_index(x, y, self.hit_radius).map(|index| TooltipState {
                tooltip: Tooltip::for_record(&plot.records()[index]),
                anchor: (x, y - TOOLTIP_OFFSET_Y),
                index,
            }),
            OverlayEvent::PointerLeave => None,
        };
        *self.state.borrow_mut() = next;
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Snapshot of the current tooltip, if one is showing.
    pub fn current(&self) -> Option<TooltipState> {
        self.state.borrow().clone()
    }
}

impl Default for TooltipOverlay {
    fn default() -> Self { Self::new() }
}
