use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::GridConfig;
use crate::model::{Point, SurfaceRect};
use crate::render::{self, DrawCommand};
use crate::state::{GridBoard, GridInput};
use crate::surface::CanvasSurface;

#[derive(Properties, PartialEq, Clone)]
pub struct GridCanvasProps {
    pub config: GridConfig,
    /// Fired with the mark count after every repaint.
    pub on_marks_changed: Callback<usize>,
}

#[function_component(GridCanvas)]
pub fn grid_canvas(props: &GridCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let board = use_mut_ref(|| GridBoard::new(props.config));

    // Mount: bind listeners once, unbind on unmount
    {
        let canvas_ref = canvas_ref.clone();
        let board = board.clone();
        let on_marks_changed = props.on_marks_changed.clone();
        use_effect_with((), move |_| {
            let bound = canvas_ref
                .cast::<HtmlCanvasElement>()
                .ok_or_else(|| JsValue::from_str("canvas_ref not attached to a canvas element"))
                .and_then(|canvas| bind(canvas, board, on_marks_changed));
            let bound = match bound {
                Ok(b) => Some(b),
                Err(e) => {
                    log::error!("grid canvas mount failed: {:?}", e);
                    None
                }
            };
            move || {
                if let Some(b) = bound {
                    b.unbind();
                }
            }
        });
    }

    let size = props.config.surface_size;
    html! {
        <canvas
            ref={canvas_ref}
            id="amsler-grid"
            style={format!("width:{size}px; height:{size}px; border:1px solid #30363d; touch-action:none; cursor:crosshair;")}
        />
    }
}

/// Glue between DOM events, the board and the canvas.
struct CanvasHost {
    board: Rc<RefCell<GridBoard>>,
    surface: RefCell<CanvasSurface>,
    on_marks_changed: Callback<usize>,
}

impl CanvasHost {
    fn rect(&self) -> SurfaceRect {
        self.surface.borrow().rect()
    }

    fn mouse_point(&self, e: &MouseEvent) -> Point {
        Point::from_client(e.client_x() as f64, e.client_y() as f64, self.rect())
    }

    fn touch_point(&self, e: &TouchEvent) -> Option<Point> {
        let t0 = e.touches().item(0)?;
        Some(Point::from_client(
            t0.client_x() as f64,
            t0.client_y() as f64,
            self.rect(),
        ))
    }

    fn paint(&self, frame: &[DrawCommand]) {
        render::replay(&mut *self.surface.borrow_mut(), frame);
    }

    fn dispatch(&self, input: GridInput) {
        let frame = self.board.borrow_mut().apply(input);
        let Some(frame) = frame else {
            return;
        };
        self.paint(&frame);
        let board = self.board.borrow();
        if matches!(
            input,
            GridInput::End | GridInput::Leave | GridInput::Remove(_)
        ) {
            log::debug!("marks: {}", board.marks_json());
        }
        self.on_marks_changed.emit(board.marks().len());
    }
}

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

fn listener<E>(event: &'static str, mut f: impl FnMut(E) + 'static) -> Listener
where
    E: JsCast + 'static,
{
    let callback = Closure::wrap(Box::new(move |e: Event| {
        if let Ok(e) = e.dyn_into::<E>() {
            f(e);
        }
    }) as Box<dyn FnMut(Event)>);
    Listener { event, callback }
}

struct Binding {
    canvas: HtmlCanvasElement,
    listeners: Vec<Listener>,
}

impl Binding {
    fn unbind(self) {
        for l in &self.listeners {
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref())
            {
                log::warn!("grid canvas: removing {} listener failed: {:?}", l.event, e);
            }
        }
        log::debug!("grid canvas: {} listeners removed", self.listeners.len());
    }
}

fn bind(
    canvas: HtmlCanvasElement,
    board: Rc<RefCell<GridBoard>>,
    on_marks_changed: Callback<usize>,
) -> Result<Binding, JsValue> {
    let surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(board.borrow().config.surface_size);
    let host = Rc::new(CanvasHost {
        board,
        surface: RefCell::new(surface),
        on_marks_changed,
    });
    host.paint(&host.board.borrow().redraw_all());

    let listeners = vec![
        {
            let host = host.clone();
            listener("mousedown", move |e: MouseEvent| {
                e.prevent_default();
                // secondary button is handled by contextmenu
                if e.button() == 0 {
                    host.dispatch(GridInput::Begin(Some(host.mouse_point(&e))));
                }
            })
        },
        {
            let host = host.clone();
            listener("mousemove", move |e: MouseEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Move(Some(host.mouse_point(&e))));
            })
        },
        {
            let host = host.clone();
            listener("mouseup", move |e: MouseEvent| {
                e.prevent_default();
                host.dispatch(GridInput::End);
            })
        },
        {
            let host = host.clone();
            listener("mouseleave", move |e: MouseEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Leave);
            })
        },
        {
            let host = host.clone();
            listener("touchstart", move |e: TouchEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Begin(host.touch_point(&e)));
            })
        },
        {
            let host = host.clone();
            listener("touchmove", move |e: TouchEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Move(host.touch_point(&e)));
            })
        },
        {
            let host = host.clone();
            listener("touchend", move |e: TouchEvent| {
                e.prevent_default();
                host.dispatch(GridInput::End);
            })
        },
        {
            let host = host.clone();
            listener("touchcancel", move |e: TouchEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Leave);
            })
        },
        {
            let host = host.clone();
            listener("contextmenu", move |e: MouseEvent| {
                e.prevent_default();
                host.dispatch(GridInput::Remove(Some(host.mouse_point(&e))));
            })
        },
    ];

    for l in &listeners {
        canvas.add_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref())?;
    }
    log::info!(
        "grid canvas bound: {}px, {} divisions",
        host.board.borrow().config.surface_size,
        host.board.borrow().config.grid_divisions
    );
    Ok(Binding { canvas, listeners })
}
