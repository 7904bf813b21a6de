//! Immediate-mode drawing for the grid.
//!
//! Everything here paints through the [`Surface`] trait, so the same code
//! drives the real canvas and the `Vec<DrawCommand>` recorder used by the
//! board to build frames.

use crate::config::{GridConfig, GridStyle};
use crate::model::{Mark, Point};

/// Minimal drawing capability the grid needs from a backend.
pub trait Surface {
    /// Wipes a `width` x `height` area anchored at the origin.
    fn clear(&mut self, width: f64, height: f64);
    fn draw_line(&mut self, from: Point, to: Point, color: &'static str, width: f64);
    fn draw_filled_circle(&mut self, center: Point, radius: f64, fill: &'static str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: &'static str,
        width: f64,
    },
    FilledCircle {
        center: Point,
        radius: f64,
        fill: &'static str,
    },
}

/// A full repaint, in drawing order.
pub type Frame = Vec<DrawCommand>;

impl Surface for Vec<DrawCommand> {
    fn clear(&mut self, width: f64, height: f64) {
        self.push(DrawCommand::Clear { width, height });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &'static str, width: f64) {
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, fill: &'static str) {
        self.push(DrawCommand::FilledCircle {
            center,
            radius,
            fill,
        });
    }
}

/// Plays recorded commands onto another surface.
pub fn replay<S: Surface + ?Sized>(surface: &mut S, commands: &[DrawCommand]) {
    for cmd in commands {
        match *cmd {
            DrawCommand::Clear { width, height } => surface.clear(width, height),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => surface.draw_line(from, to, color, width),
            DrawCommand::FilledCircle {
                center,
                radius,
                fill,
            } => surface.draw_filled_circle(center, radius, fill),
        }
    }
}

/// Clears the surface and paints the background grid with its centre marker.
pub fn render_grid<S: Surface + ?Sized>(surface: &mut S, cfg: &GridConfig) {
    let size = cfg.surface_size;
    let step = cfg.step();
    let style = &cfg.style;
    surface.clear(size, size);
    for i in 0..=cfg.grid_divisions {
        let at = i as f64 * step;
        surface.draw_line(
            Point::new(at, 0.0),
            Point::new(at, size),
            style.line_color,
            style.line_width,
        );
        surface.draw_line(
            Point::new(0.0, at),
            Point::new(size, at),
            style.line_color,
            style.line_width,
        );
    }
    surface.draw_filled_circle(cfg.centre(), style.centre_radius, style.centre_color);
}

pub fn render_mark<S: Surface + ?Sized>(surface: &mut S, mark: &Mark, style: &GridStyle) {
    surface.draw_filled_circle(mark.center, mark.radius, style.mark_fill);
}

/// Grid first, then every mark in insertion order.
pub fn redraw_all<S: Surface + ?Sized>(surface: &mut S, cfg: &GridConfig, marks: &[Mark]) {
    render_grid(surface, cfg);
    for mark in marks {
        render_mark(surface, mark, &cfg.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(frame: &[DrawCommand]) -> Vec<(Point, Point)> {
        frame
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::Line { from, to, .. } => Some((from, to)),
                _ => None,
            })
            .collect()
    }

    fn circles(frame: &[DrawCommand]) -> Vec<(Point, f64, &'static str)> {
        frame
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FilledCircle {
                    center,
                    radius,
                    fill,
                } => Some((center, radius, fill)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn grid_starts_with_a_full_clear() {
        let cfg = GridConfig::default();
        let mut frame = Frame::new();
        render_grid(&mut frame, &cfg);
        assert_eq!(
            frame[0],
            DrawCommand::Clear {
                width: 600.0,
                height: 600.0
            }
        );
        assert_eq!(
            frame.iter().filter(|c| matches!(c, DrawCommand::Clear { .. })).count(),
            1
        );
    }

    #[test]
    fn grid_draws_one_line_pair_per_division_boundary() {
        let cfg = GridConfig::default();
        let mut frame = Frame::new();
        render_grid(&mut frame, &cfg);

        let lines = lines(&frame);
        assert_eq!(lines.len(), 2 * 21);
        for i in 0..=20u32 {
            let at = i as f64 * 30.0;
            assert!(lines.contains(&(Point::new(at, 0.0), Point::new(at, 600.0))));
            assert!(lines.contains(&(Point::new(0.0, at), Point::new(600.0, at))));
        }
    }

    #[test]
    fn grid_has_exactly_one_centre_marker() {
        let cfg = GridConfig::default();
        let mut frame = Frame::new();
        render_grid(&mut frame, &cfg);

        let circles = circles(&frame);
        assert_eq!(circles, vec![(Point::new(300.0, 300.0), 5.0, "red")]);
        assert!(matches!(frame.last(), Some(DrawCommand::FilledCircle { .. })));
    }

    #[test]
    fn redraw_paints_marks_on_top_in_insertion_order() {
        let cfg = GridConfig::default();
        let marks = [
            Mark::new(Point::new(10.0, 10.0), 4.0),
            Mark::new(Point::new(50.0, 60.0), 8.0),
        ];
        let mut frame = Frame::new();
        redraw_all(&mut frame, &cfg, &marks);

        let tail: Vec<_> = circles(&frame).into_iter().skip(1).collect();
        assert_eq!(
            tail,
            vec![
                (Point::new(10.0, 10.0), 4.0, cfg.style.mark_fill),
                (Point::new(50.0, 60.0), 8.0, cfg.style.mark_fill),
            ]
        );
    }

    #[test]
    fn redraw_twice_yields_identical_frames() {
        let cfg = GridConfig::default();
        let marks = [Mark::new(Point::new(100.0, 100.0), 20.0)];
        let mut first = Frame::new();
        let mut second = Frame::new();
        redraw_all(&mut first, &cfg, &marks);
        redraw_all(&mut second, &cfg, &marks);
        assert_eq!(first, second);
    }

    #[test]
    fn replay_reproduces_the_recording() {
        let cfg = GridConfig::default();
        let mut original = Frame::new();
        redraw_all(&mut original, &cfg, &[Mark::new(Point::new(1.0, 2.0), 3.0)]);
        let mut copy = Frame::new();
        replay(&mut copy, &original);
        assert_eq!(copy, original);
    }
}
