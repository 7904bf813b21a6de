pub mod app;
pub mod grid_canvas;
pub mod instructions_panel;
