use shared::models::SourceRef;
use yew::{Callback, Html, Properties, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct SourceListProps {
    /// Cited passages in the relevance order returned by the backend.
    pub sources: Vec<SourceRef>,
}

/// Collapsible list of cited source passages under an assistant answer.
#[function_component(SourceList)]
pub fn source_list(props: &SourceListProps) -> Html {
    let expanded = use_state(|| false);

    if props.sources.is_empty() {
        return Html::default();
    }

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    html! {
        <div class="mt-2 text-sm">
            <p class="font-semibold text-gray-700 cursor-pointer" onclick={on_toggle}>
                { format!("Sources ({}):", props.sources.len()) }
            </p>
            { if *expanded {
                html! {
                    { for props.sources.iter().map(|source| html! {
                        <div class="mt-1 bg-gray-50 p-2 rounded">
                            <p class="text-xs text-gray-500">
                                { format!("Page {} (Score: {:.2})", source.page, source.score) }
                            </p>
                            <p class="text-xs text-gray-600">{ source.content.clone() }</p>
                        </div>
                    }) }
                }
            } else {
                html! {}
            }}
        </div>
    }
}
