//! # wms-charts
//!
//! SVG charting built with Leptos for the warehouse dashboard.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, path builders, axis ticks
//! - `line` - Time series line chart (stock movements)
//! - `pie` - Categorical pie chart (zone distribution)

pub mod chartkit;
pub mod line;
pub mod pie;

pub use chartkit::*;
pub use line::*;
pub use pie::*;

// Re-export colors from wms-core for convenience
pub use wms_core::colors;

/// One labelled point of a categorical series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Top,
    Hidden,
}

/// Chart margin configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Standard margins: room for y labels left, x labels below
    pub const fn standard() -> Self {
        Self::new(16.0, 16.0, 28.0, 48.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub const fn new(width: f64, height: f64, margin: ChartMargin) -> Self {
        Self { width, height, margin }
    }

    /// Plot area width (inside margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Plot area height (inside margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.margin.left + self.inner_width()
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.margin.top + self.inner_height()
    }
}
