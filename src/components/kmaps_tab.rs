use super::kmap_view::KmapPanel;
use crate::kmap::KMap;
use crate::view::KmapPanels;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KmapsTabProps {
    pub kmaps: [KMap; 3],
}

#[function_component(KmapsTab)]
pub fn kmaps_tab(props: &KmapsTabProps) -> Html {
    let panels = use_state(KmapPanels::new);

    let grid_class = if panels.expanded().is_some() {
        "kmaps-grid kmaps-grid-expanded"
    } else {
        "kmaps-grid"
    };

    html! {
        <div class="kmaps-tab">
            <div class={grid_class}>
                { for props.kmaps.iter().map(|&kmap| {
                    let output = kmap.output();
                    let on_toggle = {
                        let panels = panels.clone();
                        Callback::from(move |_| {
                            let mut next = *panels;
                            next.toggle(output);
                            panels.set(next);
                        })
                    };
                    let wrapper_class = if panels.is_hidden(output) {
                        "kmap-slot kmap-slot-hidden"
                    } else {
                        "kmap-slot"
                    };
                    html! {
                        <div class={wrapper_class}>
                            <KmapPanel
                                {kmap}
                                expanded={panels.is_expanded(output)}
                                {on_toggle}
                            />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
