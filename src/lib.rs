//! Amsler grid: a canvas widget for circling distorted areas of a grid.
//!
//! The drawing and gesture logic (`render`, `state`) is browser-free; the
//! `components` and `surface` modules bind it to a Yew app and a 2D canvas.

pub mod components;
pub mod config;
pub mod model;
pub mod render;
pub mod state;
pub mod surface;
pub mod util;
