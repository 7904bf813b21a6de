//! Fixed sizing and palette for the grid surface.

use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Width and height of the square surface in canvas pixels.
    pub surface_size: f64,
    /// Number of cells along each axis.
    pub grid_divisions: u32,
    pub style: GridStyle,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            surface_size: 600.0,
            grid_divisions: 20,
            style: GridStyle::default(),
        }
    }
}

impl GridConfig {
    /// Distance between two neighbouring grid lines.
    pub fn step(&self) -> f64 {
        self.surface_size / self.grid_divisions.max(1) as f64
    }

    pub fn centre(&self) -> Point {
        let half = self.surface_size / 2.0;
        Point::new(half, half)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub line_color: &'static str,
    pub line_width: f64,
    pub centre_color: &'static str,
    pub centre_radius: f64,
    /// Fill for committed marks and the live drag preview.
    pub mark_fill: &'static str,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line_color: "black",
            line_width: 1.0,
            centre_color: "red",
            centre_radius: 5.0,
            mark_fill: "rgba(0, 0, 255, 0.3)",
        }
    }
}
