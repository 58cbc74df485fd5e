use crate::circuit::OutputBit;
use crate::table::TruthTable;
use crate::view::{RowHighlight, Selection};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TruthTableViewProps {
    pub table: TruthTable,
    pub selection: Selection,
    pub on_row_click: Callback<usize>,
    pub on_output_click: Callback<OutputBit>,
}

#[function_component(TruthTableView)]
pub fn truth_table_view(props: &TruthTableViewProps) -> Html {
    let highlighted = props.selection.highlighted_output();

    html! {
        <div class="truth-table-wrapper">
            <table class="truth-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"D"}</th>
                        <th>{"A1"}</th>
                        <th>{"A0"}</th>
                        <th>{"B1"}</th>
                        <th>{"B0"}</th>
                        { for OutputBit::ALL.iter().map(|&output| {
                            let on_click = {
                                let on_output_click = props.on_output_click.clone();
                                Callback::from(move |_| on_output_click.emit(output))
                            };
                            html! {
                                <th
                                    class="output-header"
                                    onclick={on_click}
                                    title={format!("Click to highlight rows where {}=1", output)}
                                >
                                    { output.label() }
                                    { if highlighted == Some(output) { " \u{2713}" } else { "" } }
                                </th>
                            }
                        })}
                    </tr>
                </thead>
                <tbody>
                    { for props.table.iter().enumerate().map(|(index, row)| {
                        let on_click = {
                            let on_row_click = props.on_row_click.clone();
                            Callback::from(move |_| on_row_click.emit(index))
                        };
                        let class = match props.selection.highlight(index, row) {
                            Some(RowHighlight::Selected) => "row-selected",
                            Some(RowHighlight::OutputMatch) => "row-output-match",
                            None if index % 2 == 0 => "row-even",
                            None => "row-odd",
                        };
                        let i = row.inputs;
                        let o = row.outputs;
                        html! {
                            <tr {class} onclick={on_click} title="Click to highlight/unhighlight this row">
                                <td class="row-number">{index + 1}</td>
                                <td>{i.d as u8}</td>
                                <td>{i.a1 as u8}</td>
                                <td>{i.a0 as u8}</td>
                                <td>{i.b1 as u8}</td>
                                <td>{i.b0 as u8}</td>
                                <td class="output-cell">{o.c2 as u8}</td>
                                <td class="output-cell">{o.c1 as u8}</td>
                                <td class="output-cell">{o.c0 as u8}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
