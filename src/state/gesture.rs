use crate::model::Point;

/// Drag state for a single mark being drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging { origin: Point, current: Point },
}

impl Gesture {
    /// Radius of the circle the drag currently describes.
    pub fn radius(&self) -> Option<f64> {
        match *self {
            Gesture::Idle => None,
            Gesture::Dragging { origin, current } => Some(origin.distance_to(current)),
        }
    }
}
