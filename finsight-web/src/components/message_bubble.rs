use chrono::{FixedOffset, Local, Offset};
use shared::models::{Message, MessageRole};
use yew::{Html, Properties, classes, function_component, html};

use super::source_list::SourceList;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: Message,
}

const fn role_classes(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "bg-blue-500 text-white rounded-br-none",
        MessageRole::Assistant => "bg-white text-gray-800 rounded-bl-none shadow-sm",
    }
}

fn viewer_offset() -> FixedOffset {
    Local::now().offset().fix()
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let align = match message.role {
        MessageRole::User => "justify-end",
        MessageRole::Assistant => "justify-start",
    };

    // Stored timestamps are UTC; localization happens here and only here.
    let created_at = message.created_at.localize(viewer_offset());

    html! {
        <div class={classes!("flex", align)}>
            <div class="flex flex-col max-w-[80%]">
                <div class={classes!("rounded-2xl", "px-4", "py-2", role_classes(message.role))}>
                    <p>{ message.content.clone() }</p>
                    { if message.role == MessageRole::Assistant {
                        html! { <SourceList sources={message.sources.clone()} /> }
                    } else {
                        html! {}
                    }}
                </div>
                <span class="text-xs text-gray-400 mt-1">
                    { created_at.display() }
                </span>
            </div>
        </div>
    }
}
