use super::{CircuitTab, Header, KmapsTab, TabNavigation, TruthTableView};
use crate::circuit::OutputBit;
use crate::kmap::KMap;
use crate::table::TruthTable;
use crate::view::{Selection, Tab};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let active_tab = use_state(Tab::default);
    let selection = use_state(Selection::new);

    // The static artifacts are computed once and shared read-only by the
    // views; interaction state never feeds back into them.
    let data = use_memo((), |_| {
        let table = TruthTable::generate();
        (table, KMap::project_all(&table))
    });
    let (table, kmaps) = *data;

    let on_tab_change = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let on_row_click = {
        let selection = selection.clone();
        Callback::from(move |index: usize| {
            let mut next = (*selection).clone();
            next.toggle_row(index);
            selection.set(next);
        })
    };

    let on_output_click = {
        let selection = selection.clone();
        Callback::from(move |output: OutputBit| {
            let mut next = (*selection).clone();
            next.click_output(output);
            selection.set(next);
        })
    };

    html! {
        <div class="app">
            <div class="app-shell">
                <Header />
                <TabNavigation active={*active_tab} on_change={on_tab_change} />
                <div class="app-panel">
                    { match *active_tab {
                        Tab::Truth => html! {
                            <TruthTableView
                                {table}
                                selection={(*selection).clone()}
                                {on_row_click}
                                {on_output_click}
                            />
                        },
                        Tab::Kmap => html! { <KmapsTab {kmaps} /> },
                        Tab::Circuit => html! { <CircuitTab /> },
                    }}
                </div>
            </div>
        </div>
    }
}
