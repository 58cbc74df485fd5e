use crate::circuit::{InputLine, Inputs};
use crate::view::{ClickOutcome, ZoomPan};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

// Overlay positions are percentages of the schematic raster's size and only
// line up with that particular image; the light diameter is 1.5% of the
// image width.
struct Light {
    left: f64,
    top: f64,
    class: &'static str,
    title: &'static str,
}

const INPUT_LIGHTS: [(InputLine, Light); 5] = [
    (
        InputLine::D,
        Light {
            left: 2.2,
            top: 0.0,
            class: "light light-input-a",
            title: "D input ON",
        },
    ),
    (
        InputLine::A1,
        Light {
            left: 2.7,
            top: 21.7,
            class: "light light-input-a",
            title: "A1 input ON",
        },
    ),
    (
        InputLine::A0,
        Light {
            left: 2.7,
            top: 46.5,
            class: "light light-input-a",
            title: "A0 input ON",
        },
    ),
    (
        InputLine::B1,
        Light {
            left: 2.2,
            top: 74.0,
            class: "light light-input-b",
            title: "B1 input ON",
        },
    ),
    (
        InputLine::B0,
        Light {
            left: 2.2,
            top: 93.0,
            class: "light light-input-b",
            title: "B0 input ON",
        },
    ),
];

const OUTPUT_LIGHTS: [Light; 3] = [
    Light {
        left: 96.3,
        top: 9.7,
        class: "light light-output",
        title: "C2 output ON",
    },
    Light {
        left: 96.3,
        top: 46.6,
        class: "light light-output",
        title: "C1 output ON",
    },
    Light {
        left: 96.85,
        top: 89.9,
        class: "light light-output",
        title: "C0 output ON",
    },
];

fn render_light(light: &Light) -> Html {
    html! {
        <div
            class={light.class}
            title={light.title}
            style={format!(
                "left: {}%; top: {}%; width: 1.5%; aspect-ratio: 1; opacity: 0.9;",
                light.left, light.top
            )}
        />
    }
}

#[function_component(CircuitTab)]
pub fn circuit_tab() -> Html {
    let inputs = use_state(Inputs::default);
    let zoom = use_state(ZoomPan::new);
    let container = use_node_ref();

    let outputs = inputs.outputs();
    let mode = inputs.mode();

    let on_mouse_down = {
        let zoom = zoom.clone();
        let container = container.clone();
        Callback::from(move |event: MouseEvent| {
            if !zoom.is_zoomed() {
                return;
            }
            event.prevent_default();
            if let Some(element) = container.cast::<web_sys::Element>() {
                let mut next = *zoom;
                next.press(
                    (event.client_x() as f64, event.client_y() as f64),
                    (element.scroll_left() as f64, element.scroll_top() as f64),
                );
                zoom.set(next);
            }
        })
    };

    let on_mouse_move = {
        let zoom = zoom.clone();
        let container = container.clone();
        Callback::from(move |event: MouseEvent| {
            if !zoom.is_dragging() {
                return;
            }
            event.prevent_default();
            let mut next = *zoom;
            if let Some((scroll_x, scroll_y)) =
                next.drag_to((event.client_x() as f64, event.client_y() as f64))
            {
                if let Some(element) = container.cast::<web_sys::Element>() {
                    element.set_scroll_left(scroll_x as i32);
                    element.set_scroll_top(scroll_y as i32);
                }
            }
            zoom.set(next);
        })
    };

    let on_mouse_up = {
        let zoom = zoom.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *zoom;
            next.release();
            zoom.set(next);
        })
    };

    let on_mouse_leave = {
        let zoom = zoom.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *zoom;
            next.leave();
            zoom.set(next);
        })
    };

    let on_image_click = {
        let zoom = zoom.clone();
        let container = container.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = container.cast::<web_sys::Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let at = (
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
            let mut next = *zoom;
            match next.click(at, (rect.width(), rect.height())) {
                ClickOutcome::Suppressed => {
                    event.prevent_default();
                    event.stop_propagation();
                }
                ClickOutcome::ZoomedIn { scroll_to } => {
                    // The 2x layout has to be committed before the viewport
                    // can be scrolled to the clicked point.
                    let container = container.clone();
                    Timeout::new(0, move || {
                        if let Some(element) = container.cast::<web_sys::Element>() {
                            element.set_scroll_left(scroll_to.0 as i32);
                            element.set_scroll_top(scroll_to.1 as i32);
                        }
                    })
                    .forget();
                }
                ClickOutcome::ZoomedOut => {}
            }
            zoom.set(next);
        })
    };

    let toggle_button = |line: InputLine| {
        let on_click = {
            let inputs = inputs.clone();
            Callback::from(move |_| {
                let mut next = *inputs;
                next.toggle(line);
                inputs.set(next);
            })
        };
        let on = inputs.get(line);
        let class = match (line, on) {
            (InputLine::D, false) => "input-toggle input-toggle-add",
            (InputLine::D, true) => "input-toggle input-toggle-sub",
            (InputLine::A1 | InputLine::A0, true) => "input-toggle input-toggle-a-on",
            (InputLine::B1 | InputLine::B0, true) => "input-toggle input-toggle-b-on",
            (_, false) => "input-toggle input-toggle-off",
        };
        let face = match line {
            InputLine::D => {
                if on {
                    "\u{2212}".to_string()
                } else {
                    "+".to_string()
                }
            }
            _ => (on as u8).to_string(),
        };
        html! {
            <div class="input-toggle-group">
                <button {class} onclick={on_click}>{face}</button>
                <div class="input-toggle-label">{line.label()}</div>
                { if line == InputLine::D {
                    html! {
                        <div class="input-toggle-sublabel">
                            { if on { "Sub" } else { "Add" } }
                        </div>
                    }
                } else {
                    html!{}
                }}
            </div>
        }
    };

    let container_class = if zoom.is_zoomed() {
        "schematic-viewport schematic-viewport-zoomed"
    } else {
        "schematic-viewport"
    };
    let stage_class = if zoom.is_zoomed() {
        "schematic-stage schematic-stage-zoomed"
    } else {
        "schematic-stage"
    };

    html! {
        <div class="circuit-tab">
            <div class="circuit-card">
                <div class="circuit-card-header">
                    <h3>{"2-Bit Adder/Subtractor Circuit"}</h3>
                </div>

                <div class="operation-card">
                    <div class="operation-caption">
                        {"Current Operation: "}
                        <span class="operation-name">{mode.name()}</span>
                    </div>
                    <div class="operation-row">
                        <div class="operand">
                            <div class="operand-caption">{"Input 1"}</div>
                            <div class="operand-value operand-a">
                                <div class="operand-bits">
                                    {format!("{}{}", inputs.a1 as u8, inputs.a0 as u8)}<sub>{"2"}</sub>
                                </div>
                                <div class="operand-decimal">{inputs.a()}</div>
                            </div>
                        </div>
                        <div class="operation-symbol">{mode.symbol()}</div>
                        <div class="operand">
                            <div class="operand-caption">{"Input 2"}</div>
                            <div class="operand-value operand-b">
                                <div class="operand-bits">
                                    {format!("{}{}", inputs.b1 as u8, inputs.b0 as u8)}<sub>{"2"}</sub>
                                </div>
                                <div class="operand-decimal">{inputs.b()}</div>
                            </div>
                        </div>
                        <div class="operation-symbol operation-equals">{"="}</div>
                        <div class="operand">
                            <div class="operand-caption">{"Output"}</div>
                            <div class="operand-value operand-c">
                                <div class="operand-bits">
                                    {format!("{}{}{}", outputs.c2 as u8, outputs.c1 as u8, outputs.c0 as u8)}<sub>{"2"}</sub>
                                </div>
                                <div class="operand-decimal">{outputs.display_value(mode)}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="controls-card">
                    <div class="controls-caption">{"Control & Inputs"}</div>
                    <div class="controls-row">
                        { for InputLine::ALL.iter().map(|&line| toggle_button(line)) }
                    </div>
                    <div class="controls-hint">
                        {"Click the buttons above to toggle input values and see the circuit respond in real-time"}
                    </div>
                </div>
            </div>

            <div class="schematic-card">
                <h4>{"Logic Gate Circuit Diagram"}</h4>
                <div class="schematic-note">
                    {"The circuit shows the internal logic gates implementing the 2-bit adder/subtractor functionality."}
                </div>
                <div
                    ref={container.clone()}
                    class={container_class}
                    onmousemove={on_mouse_move}
                    onmouseup={on_mouse_up}
                    onmouseleave={on_mouse_leave}
                >
                    <div
                        class={stage_class}
                        onclick={on_image_click}
                        onmousedown={on_mouse_down}
                    >
                        <img
                            src="assets/circuit.png"
                            alt="2-Bit Adder/Subtractor Circuit Diagram"
                            class="schematic-image"
                            draggable="false"
                        />
                        { for INPUT_LIGHTS.iter().filter(|(line, _)| inputs.get(*line)).map(|(_, light)| render_light(light)) }
                        { for OUTPUT_LIGHTS.iter().zip([outputs.c2, outputs.c1, outputs.c0]).filter(|(_, on)| *on).map(|(light, _)| render_light(light)) }
                    </div>
                </div>
                { if zoom.is_zoomed() {
                    html! {
                        <div class="schematic-zoom-hint">
                            {"Click again to zoom out \u{2022} Drag to pan around"}
                        </div>
                    }
                } else {
                    html!{}
                }}
            </div>
        </div>
    }
}
