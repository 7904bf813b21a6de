//! Core data types for the grid: points, the canvas offset and circular marks.

use serde::Serialize;

/// A position in surface-local canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts a viewport (client) coordinate into surface-local space.
    pub fn from_client(client_x: f64, client_y: f64, rect: SurfaceRect) -> Self {
        Self {
            x: client_x - rect.left,
            y: client_y - rect.top,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Top-left corner of the drawable area in viewport space, read fresh for every event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

impl SurfaceRect {
    /// Drawable origin of an element whose bounding box starts at
    /// (`left`, `top`) and carries a left/top border of the given widths.
    pub fn from_bounds(left: f64, top: f64, border_left: f64, border_top: f64) -> Self {
        Self {
            left: left + border_left,
            top: top + border_top,
        }
    }
}

/// A user-drawn circle marking an abnormal area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mark {
    pub center: Point,
    pub radius: f64,
}

impl Mark {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Inclusive hit test: a point on the rim counts as inside.
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_point_is_offset_by_surface_rect() {
        let rect = SurfaceRect {
            left: 40.0,
            top: 120.5,
        };
        let p = Point::from_client(50.0, 130.5, rect);
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn bordered_surface_offsets_by_its_border() {
        // 1px border: bounding box at (20, 40), drawing starts at (21, 41)
        let rect = SurfaceRect::from_bounds(20.0, 40.0, 1.0, 1.0);
        let centre = Point::from_client(20.0 + 1.0 + 300.0, 40.0 + 1.0 + 300.0, rect);
        assert_eq!(centre, Point::new(300.0, 300.0));
    }

    #[test]
    fn borderless_surface_matches_bounding_box() {
        let rect = SurfaceRect::from_bounds(15.5, 8.0, 0.0, 0.0);
        assert_eq!(rect, SurfaceRect { left: 15.5, top: 8.0 });
    }

    #[test]
    fn rim_point_is_inside_mark() {
        let mark = Mark::new(Point::new(100.0, 100.0), 20.0);
        assert!(mark.contains(Point::new(120.0, 100.0)));
        assert!(mark.contains(Point::new(100.0, 80.0)));
        assert!(!mark.contains(Point::new(120.5, 100.0)));
    }

    #[test]
    fn zero_radius_mark_only_hits_its_centre() {
        let mark = Mark::new(Point::new(5.0, 5.0), 0.0);
        assert!(mark.contains(Point::new(5.0, 5.0)));
        assert!(!mark.contains(Point::new(5.0, 5.1)));
    }

    #[test]
    fn negative_radius_is_clamped() {
        assert_eq!(Mark::new(Point::default(), -3.0).radius, 0.0);
    }

    #[test]
    fn nan_point_is_not_finite() {
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(Point::new(0.0, 1.0).is_finite());
    }
}
