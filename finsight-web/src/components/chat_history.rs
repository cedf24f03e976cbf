use shared::models::{ConversationSummary, ConversationToken};
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ChatHistoryProps {
    /// Conversation summaries in the order returned by the backend.
    pub conversations: Vec<ConversationSummary>,
    /// Token of the active conversation; drives the highlighted row.
    pub selected: ConversationToken,
    pub on_select: Callback<ConversationToken>,
    /// Starts a fresh, unsaved conversation.
    pub on_new: Callback<MouseEvent>,
}

#[function_component(ChatHistory)]
pub fn chat_history(props: &ChatHistoryProps) -> Html {
    html! {
        <div class="w-80 border-r border-gray-200 bg-gray-50 flex flex-col">
            <div class="p-4 border-b border-gray-200 flex justify-between items-center">
                <h2 class="text-lg font-semibold text-gray-800">{"Recents"}</h2>
                <button
                    class="text-gray-800 hover:text-gray-500"
                    type="button"
                    title="New conversation"
                    onclick={props.on_new.clone()}
                >
                    {"✎"}
                </button>
            </div>
            <div class="overflow-y-auto flex-1">
                { for props.conversations.iter().map(|conversation| {
                    let is_selected = props.selected == conversation.token;
                    let token = conversation.token.clone();
                    let on_select = props.on_select.clone();
                    let class = if is_selected {
                        classes!("p-4", "cursor-pointer", "border-b", "border-gray-200", "bg-gray-300")
                    } else {
                        classes!("p-4", "cursor-pointer", "border-b", "border-gray-200", "hover:bg-gray-100")
                    };
                    html! {
                        <div
                            key={conversation.token.as_str().to_string()}
                            class={class}
                            onclick={Callback::from(move |_| on_select.emit(token.clone()))}
                        >
                            <p class="text-sm font-medium text-gray-900 truncate">
                                { conversation.name.clone() }
                            </p>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
