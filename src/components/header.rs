use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="app-header">
            <div class="app-header-title">
                <h1>{"2-Bit Calculator Visualizer"}</h1>
            </div>
            <div class="app-header-legend">
                <div class="legend-row">
                    <span class="legend-caption">{"5 Inputs:"}</span>
                    <span class="legend-pill legend-mode">{"D (Mode)"}</span>
                    <span class="legend-pill legend-a">{"A\u{2081}, A\u{2080}"}</span>
                    <span class="legend-pill legend-b">{"B\u{2081}, B\u{2080}"}</span>
                </div>
                <div class="legend-row">
                    <span class="legend-caption">{"3 Outputs:"}</span>
                    <span class="legend-pill legend-out">{"C\u{2082}, C\u{2081}, C\u{2080}"}</span>
                </div>
            </div>
        </div>
    }
}
