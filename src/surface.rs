use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{Point, SurfaceRect};
use crate::render::Surface;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    /// Sizes the backing store to a `size` x `size` square.
    pub fn resize(&self, size: f64) {
        let px = size.max(0.0) as u32;
        self.canvas.set_width(px);
        self.canvas.set_height(px);
    }

    /// Current viewport offset of the canvas drawing area, inside its
    /// border. Not cached so scroll and layout changes between events are
    /// picked up.
    pub fn rect(&self) -> SurfaceRect {
        let rect = self.canvas.get_bounding_client_rect();
        SurfaceRect::from_bounds(
            rect.left(),
            rect.top(),
            self.canvas.client_left() as f64,
            self.canvas.client_top() as f64,
        )
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: &'static str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn draw_filled_circle(&mut self, center: Point, radius: f64, fill: &'static str) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(fill);
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)
            .ok();
        self.ctx.fill();
    }
}
