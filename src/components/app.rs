use super::{grid_canvas::GridCanvas, instructions_panel::InstructionsPanel};
use crate::config::GridConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = GridConfig::default();
    let mark_count = use_state_eq(|| 0_usize);

    let on_marks_changed = {
        let mark_count = mark_count.clone();
        Callback::from(move |n: usize| mark_count.set(n))
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; gap:12px; padding:16px;">
            <h2 style="margin:0;">{"Amsler Grid"}</h2>
            <InstructionsPanel mark_count={*mark_count} />
            <GridCanvas {config} {on_marks_changed} />
        </div>
    }
}
