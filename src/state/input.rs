use crate::model::Point;

/// Input the canvas forwards to the board, already in surface-local space.
///
/// `None` points stand for events whose coordinates could not be read
/// (e.g. a touch event with an empty touch list).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridInput {
    Begin(Option<Point>),
    Move(Option<Point>),
    End,
    /// Pointer left the surface or the touch was cancelled; commits like `End`.
    Leave,
    Remove(Option<Point>),
}
