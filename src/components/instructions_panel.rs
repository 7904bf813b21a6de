use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InstructionsPanelProps {
    pub mark_count: usize,
}

#[function_component]
pub fn InstructionsPanel(props: &InstructionsPanelProps) -> Html {
    let count_label = match props.mark_count {
        0 => "No areas marked".to_string(),
        1 => "1 area marked".to_string(),
        n => format!("{n} areas marked"),
    };
    html! {<div style="display:flex; flex-direction:column; gap:6px; max-width:600px; font-size:13px; line-height:1.4;">
        <div>{"Keep your eye on the red dot in the centre. Drag outward from any spot where lines look wavy, blurred or missing to circle it."}</div>
        <div style="opacity:0.7;">{"Right-click inside a circle to remove it."}</div>
        <div style="font-weight:600;">{ count_label }</div>
    </div>}
}
