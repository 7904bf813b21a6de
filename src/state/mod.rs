pub mod board;
pub mod gesture;
pub mod input;

pub use board::GridBoard;
pub use gesture::Gesture;
pub use input::GridInput;
