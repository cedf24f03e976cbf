use shared::models::Message;
use yew::{Callback, Html, Properties, function_component, html};

use super::message_bubble::MessageBubble;
use super::typing_indicator::TypingIndicator;

const SUGGESTED_QUESTIONS: [&str; 8] = [
    "What is the total revenue for 2025?",
    "What is the year-over-year operating profit growth rate?",
    "What are the main cost items?",
    "How is the cash flow situation?",
    "What is the debt ratio?",
    "How does the balance sheet look for this quarter?",
    "What are the key financial ratios?",
    "Can you explain the cash flow statement?",
];

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<Message>,
    /// An answer is pending for the active conversation.
    #[prop_or(false)]
    pub pending: bool,
    /// Fills the composer with a suggested question.
    pub on_suggest: Callback<String>,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    if props.messages.is_empty() && !props.pending {
        return html! {
            <div class="flex items-center justify-center h-full">
                <div class="text-center text-gray-500">
                    <p class="text-lg font-medium mb-2">{"Welcome to Financial Assistant"}</p>
                    <p class="text-md font-medium mb-2">{"What would you like to do?"}</p>
                    <p class="text-sm">
                        {"Start a conversation by asking a question about financial statements \
                          or upload a document for a complete review!"}
                    </p>
                    <div class="grid grid-cols-2 gap-4 mt-4">
                        { for SUGGESTED_QUESTIONS.iter().map(|question| {
                            let on_suggest = props.on_suggest.clone();
                            let text = (*question).to_string();
                            html! {
                                <div
                                    class="bg-white shadow-md rounded-lg p-4 cursor-pointer"
                                    onclick={Callback::from(move |_| on_suggest.emit(text.clone()))}
                                >
                                    <p class="text-sm text-gray-700 font-semibold">{ *question }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class="flex-1 overflow-y-auto p-4 space-y-4">
            { for props.messages.iter().cloned().map(|message| {
                let key = message.id.clone();
                html! { <MessageBubble {key} message={message} /> }
            }) }
            <TypingIndicator active={props.pending} />
        </div>
    }
}
