use crate::config::GridConfig;
use crate::model::{Mark, Point};
use crate::render::{self, Frame};

use super::{Gesture, GridInput};

/// Marks plus the in-progress drag. Every mutation hands back the frame
/// that brings the surface in line with the new state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridBoard {
    pub config: GridConfig,
    marks: Vec<Mark>,
    gesture: Gesture,
}

impl GridBoard {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            marks: Vec::new(),
            gesture: Gesture::Idle,
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Single entry point for the host: `None` means nothing needs repainting.
    pub fn apply(&mut self, input: GridInput) -> Option<Frame> {
        match input {
            GridInput::Begin(point) => {
                self.begin_gesture(point);
                None
            }
            GridInput::Move(point) => self.update_gesture(point),
            GridInput::End | GridInput::Leave => self.end_gesture(),
            GridInput::Remove(point) => Some(self.remove_at(point).1),
        }
    }

    pub fn redraw_all(&self) -> Frame {
        let mut frame = Frame::new();
        render::redraw_all(&mut frame, &self.config, &self.marks);
        frame
    }

    pub fn begin_gesture(&mut self, point: Option<Point>) {
        let Some(origin) = point.filter(|p| p.is_finite()) else {
            return;
        };
        self.gesture = Gesture::Dragging {
            origin,
            current: origin,
        };
    }

    /// Live preview: committed marks plus the circle being dragged.
    pub fn update_gesture(&mut self, point: Option<Point>) -> Option<Frame> {
        let Gesture::Dragging { origin, current } = &mut self.gesture else {
            return None;
        };
        let point = point.filter(|p| p.is_finite())?;
        *current = point;
        let preview = Mark::new(*origin, origin.distance_to(point));

        let mut frame = self.redraw_all();
        render::render_mark(&mut frame, &preview, &self.config.style);
        Some(frame)
    }

    pub fn end_gesture(&mut self) -> Option<Frame> {
        let Gesture::Dragging { origin, current } = self.gesture else {
            return None;
        };
        let mark = Mark::new(origin, origin.distance_to(current));
        log::debug!(
            "mark committed at ({:.1}, {:.1}) r={:.1}",
            mark.center.x,
            mark.center.y,
            mark.radius
        );
        self.marks.push(mark);
        self.gesture = Gesture::Idle;
        Some(self.redraw_all())
    }

    /// Drops the earliest mark containing `point`. Always repaints.
    pub fn remove_at(&mut self, point: Option<Point>) -> (Option<Mark>, Frame) {
        let removed = point
            .filter(|p| p.is_finite())
            .and_then(|p| self.marks.iter().position(|m| m.contains(p)))
            .map(|idx| self.marks.remove(idx));
        if let Some(mark) = &removed {
            log::debug!(
                "mark removed at ({:.1}, {:.1}); {} left",
                mark.center.x,
                mark.center.y,
                self.marks.len()
            );
        }
        (removed, self.redraw_all())
    }

    /// JSON snapshot of the marks for debug logging.
    pub fn marks_json(&self) -> String {
        serde_json::to_string(&self.marks).unwrap_or_default()
    }
}
