use crate::circuit::Mode;
use crate::equations::{self, Grouping};
use crate::kmap::{KMap, MapHalf, GRAY_LABELS, VISUAL_ORDER};
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KmapPanelProps {
    pub kmap: KMap,
    pub expanded: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(KmapPanel)]
pub fn kmap_panel(props: &KmapPanelProps) -> Html {
    let output = props.kmap.output();
    let on_header_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };
    let panel_class = if props.expanded {
        "kmap-panel kmap-panel-expanded"
    } else {
        "kmap-panel"
    };

    html! {
        <div class={panel_class}>
            <button class="kmap-panel-header" onclick={on_header_click}>
                <h3>{format!("K-Map {}", output)}</h3>
                <p class="kmap-panel-hint">
                    { if props.expanded { "\u{25b2} Click to collapse" } else { "\u{25bc} Click to expand" } }
                </p>
            </button>
            <div class="kmap-panel-body">
                { if props.expanded { equations_card(&props.kmap) } else { html!{} } }
                <div class="kmap-panel-grids">
                    { render_half(&props.kmap.half(Mode::Addition), props.expanded) }
                    { render_half(&props.kmap.half(Mode::Subtraction), props.expanded) }
                </div>
            </div>
        </div>
    }
}

fn equations_card(kmap: &KMap) -> Html {
    let output = kmap.output();
    let is_c0 = output == crate::circuit::OutputBit::C0;
    let xor_note = |mode: Mode| {
        if is_c0 {
            format!(
                "{} = {} {}",
                output,
                equations::equation(output, mode),
                equations::C0_XOR_EXPANSION
            )
        } else {
            format!("{} = {}", output, equations::equation(output, mode))
        }
    };

    html! {
        <div class="equations-card">
            <h4>{"Boolean Equations"}</h4>
            <div class="equations-modes">
                <div class="equation-block equation-add">
                    <div class="equation-caption">{"D = 0 (Addition)"}</div>
                    <div class="equation-text">{ xor_note(Mode::Addition) }</div>
                </div>
                <div class="equation-block equation-sub">
                    <div class="equation-caption">{"D = 1 (Subtraction)"}</div>
                    <div class="equation-text">{ xor_note(Mode::Subtraction) }</div>
                </div>
            </div>
            <div class="equation-block equation-combined">
                <div class="equation-caption">{"Combined with D"}</div>
                <div class="equation-text">{ equations::combined_equation(output) }</div>
                { if is_c0 {
                    html! {
                        <div class="equation-steps">
                            <div class="equation-caption">{"Simplification Steps"}</div>
                            { for equations::C0_SIMPLIFICATION_STEPS.iter().enumerate().map(|(depth, step)| html! {
                                <div class="equation-step" style={format!("padding-left: {}rem;", depth)}>
                                    { *step }
                                </div>
                            })}
                        </div>
                    }
                } else {
                    html!{}
                }}
            </div>
        </div>
    }
}

fn render_half(half: &MapHalf, expanded: bool) -> Html {
    let cell_px: i32 = if expanded {
        if media_matches("(min-width: 768px)") {
            56
        } else {
            48
        }
    } else {
        40
    };
    let groups: &[Grouping] = if expanded {
        equations::groupings(half.output(), half.mode())
    } else {
        &[]
    };
    let title = if expanded {
        half.title()
    } else {
        format!("D = {}", half.mode().bit() as u8)
    };

    html! {
        <div class="kmap-half">
            <h4 class="kmap-half-title">{title}</h4>
            <div class="kmap-grid-scroller">
                <div class="kmap-grid-labels">
                    <div class="kmap-corner">
                        <span class="kmap-corner-cols">{"B1 B0"}</span>
                        <span class="kmap-corner-rows">{"A1 A0"}</span>
                    </div>
                    { for GRAY_LABELS.iter().map(|label| html! {
                        <div class="kmap-row-label">{*label}</div>
                    })}
                </div>
                <div class="kmap-grid">
                    <div class="kmap-grid-header">
                        { for GRAY_LABELS.iter().map(|label| html! {
                            <div class="kmap-col-label">{*label}</div>
                        })}
                    </div>
                    <div class="kmap-grid-cells">
                        { for VISUAL_ORDER.iter().map(|&row| html! {
                            <div class="kmap-grid-row">
                                { for VISUAL_ORDER.iter().map(|&col| {
                                    let set = half.cell(row, col);
                                    let class = if set { "kmap-cell kmap-cell-1" } else { "kmap-cell kmap-cell-0" };
                                    html! { <div {class}>{set as u8}</div> }
                                })}
                            </div>
                        })}
                        { if groups.is_empty() {
                            html!{}
                        } else {
                            render_group_overlay(groups, cell_px)
                        }}
                    </div>
                </div>
            </div>
            { if groups.is_empty() {
                html!{}
            } else {
                html! {
                    <div class="kmap-legend">
                        <div class="kmap-legend-caption">{"Groups:"}</div>
                        <div class="kmap-legend-items">
                            { for groups.iter().map(|group| html! {
                                <div
                                    class="kmap-legend-item"
                                    style={format!("background-color: {};", group.color)}
                                >
                                    { group.label }
                                </div>
                            })}
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

// Outline fragments are offset inwards when several groups share an edge so
// every color stays visible.
fn render_group_overlay(groups: &[Grouping], cell_px: i32) -> Html {
    let stroke_width = (cell_px as f64 * 0.06).round().max(2.0) as i32;
    let padding = (cell_px as f64 * 0.05).round().max(1.0) as i32;
    let spacing = (cell_px as f64 * 0.03).round().max(0.0) as i32;
    let mut edge_usage: HashMap<(usize, usize, u8), i32> = HashMap::new();
    let mut lines: Vec<Html> = Vec::new();

    for group in groups {
        let stroke = group.stroke_color();
        for (row, col) in group.cells() {
            let visual_row = VISUAL_ORDER.iter().position(|&r| r == row).unwrap_or(0);
            let visual_col = VISUAL_ORDER.iter().position(|&c| c == col).unwrap_or(0);
            let x = visual_col as i32 * cell_px;
            let y = visual_row as i32 * cell_px;
            let sides = group.sides(row, col);

            let mut offset_for = |side: u8| {
                let used = edge_usage.entry((row, col, side)).or_insert(0);
                let offset = *used * (stroke_width + spacing);
                *used += 1;
                offset
            };

            if sides.top {
                let offset = offset_for(0);
                lines.push(svg_line(
                    x + padding,
                    y + padding + offset,
                    x + cell_px - padding,
                    y + padding + offset,
                    &stroke,
                    stroke_width,
                ));
            }
            if sides.right {
                let offset = offset_for(1);
                lines.push(svg_line(
                    x + cell_px - padding - offset,
                    y + padding,
                    x + cell_px - padding - offset,
                    y + cell_px - padding,
                    &stroke,
                    stroke_width,
                ));
            }
            if sides.bottom {
                let offset = offset_for(2);
                lines.push(svg_line(
                    x + padding,
                    y + cell_px - padding - offset,
                    x + cell_px - padding,
                    y + cell_px - padding - offset,
                    &stroke,
                    stroke_width,
                ));
            }
            if sides.left {
                let offset = offset_for(3);
                lines.push(svg_line(
                    x + padding + offset,
                    y + padding,
                    x + padding + offset,
                    y + cell_px - padding,
                    &stroke,
                    stroke_width,
                ));
            }
        }
    }

    let size = (cell_px * 4).to_string();
    html! {
        <svg
            class="kmap-group-overlay"
            width={size.clone()}
            height={size}
        >
            { for lines }
        </svg>
    }
}

fn svg_line(x1: i32, y1: i32, x2: i32, y2: i32, stroke: &str, width: i32) -> Html {
    html! {
        <line
            x1={x1.to_string()}
            y1={y1.to_string()}
            x2={x2.to_string()}
            y2={y2.to_string()}
            stroke={stroke.to_string()}
            stroke-width={width.to_string()}
            stroke-linecap="butt"
            shape-rendering="crispEdges"
        />
    }
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}
