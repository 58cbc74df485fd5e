use crate::view::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabNavigationProps {
    pub active: Tab,
    pub on_change: Callback<Tab>,
}

#[function_component(TabNavigation)]
pub fn tab_navigation(props: &TabNavigationProps) -> Html {
    html! {
        <div class="tab-bar">
            { for Tab::ALL.iter().map(|&tab| {
                let on_click = {
                    let on_change = props.on_change.clone();
                    Callback::from(move |_| on_change.emit(tab))
                };
                let class = if props.active == tab { "tab tab-active" } else { "tab" };
                html! {
                    <button {class} onclick={on_click}>
                        <span class="tab-label">{tab.label()}</span>
                        <span class="tab-label-short">{tab.short_label()}</span>
                    </button>
                }
            })}
        </div>
    }
}
