//! Core chart primitives: scales, path builders, tick generators

use std::fmt::Write;

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Scale a value from domain to range
    pub fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = range / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BAND SCALE (categorical x positions for date buckets)
// ============================================================================

/// Band scale for categorical data
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_outer: 0.5,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.clamp(0.0, 1.0);
        self
    }

    /// Step size between adjacent bands
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        (r_max - r_min) / self.domain_count as f64
    }

    /// Center position for index (where the point sits)
    pub fn scale_center(&self, index: usize) -> f64 {
        let (r_min, _) = self.range;
        r_min + (index as f64 + self.padding_outer) * self.step()
    }
}

impl Default for BandScale {
    fn default() -> Self {
        Self::new(1)
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx,
            ry,
            rotation,
            large_arc as u8,
            sweep as u8,
            x,
            y
        )
        .unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// PATH GENERATORS
// ============================================================================

/// Generate a line path through the given points
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    let (x, y) = points[0];
    write!(path, "M{:.2},{:.2}", x, y).unwrap();

    for &(x, y) in &points[1..] {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    path
}

/// Generate a closed area path with baseline
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut builder = PathBuilder::new()
        .move_to(points[0].0, baseline_y)
        .line_to(points[0].0, points[0].1);

    for &(x, y) in &points[1..] {
        builder = builder.line_to(x, y);
    }

    if let Some(&(last_x, _)) = points.last() {
        builder = builder.line_to(last_x, baseline_y);
    }

    builder.close().build()
}

// ============================================================================
// AXIS LABEL FORMATTING
// ============================================================================

/// Format a y-axis tick label
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // SVG y grows downward, so the y scale flips its range
        let scale = LinearScale::new().domain(0.0, 10.0).range(100.0, 0.0);
        assert_eq!(scale.scale(0.0), 100.0);
        assert_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new().domain(5.0, 5.0).range(0.0, 100.0);
        assert_eq!(scale.scale(5.0), 50.0);
    }

    #[test]
    fn test_nice_ticks_clean_steps() {
        let scale = LinearScale::new().domain(0.0, 100.0);
        let ticks = scale.nice_ticks(5);
        assert!(ticks.contains(&0.0));
        assert!(ticks.contains(&100.0));
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_band_scale_centers() {
        let scale = BandScale::new(2).range(0.0, 100.0);
        assert_eq!(scale.scale_center(0), 25.0);
        assert_eq!(scale.scale_center(1), 75.0);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(0).range(0.0, 100.0);
        assert_eq!(scale.step(), 0.0);
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert!(path.contains("M0.00,0.00"));
        assert!(path.contains("L100.00,100.00"));
        assert!(path.contains("Z"));
    }

    #[test]
    fn test_line_path_generator() {
        let path = line_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
    }

    #[test]
    fn test_area_path_closes_to_baseline() {
        let path = area_path(&[(0.0, 10.0), (50.0, 5.0)], 40.0);
        assert!(path.starts_with("M0.00,40.00"));
        assert!(path.ends_with("Z"));
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(0.0), "0");
        assert_eq!(format_axis_value(25.0), "25");
        assert_eq!(format_axis_value(2_500.0), "2.5K");
        assert_eq!(format_axis_value(1_500_000.0), "1.5M");
    }
}
