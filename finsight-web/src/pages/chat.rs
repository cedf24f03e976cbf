use chrono::Utc;
use shared::models::{
    ChatRequest, ConversationSummary, ConversationToken, Message, MessageRole, Timestamp,
};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, Properties, function_component, html, use_effect_with, use_mut_ref, use_state,
};
use yew_router::prelude::use_navigator;

use crate::api::FinsightClient;
use crate::components::{ChatHistory, Composer, FileUpload, MessageList};
use crate::routes::MainRoute;
use crate::state::{LoadAction, ReloadGuard, SendPhase, TokenFence};

#[derive(Properties, PartialEq)]
pub struct ChatPageProps {
    /// Conversation token from the route; `None` at home.
    #[prop_or(None)]
    pub token: Option<String>,
}

/// The synchronizer: single owner of the message list, the history sidebar
/// state and the upload dialog, keyed on the conversation token carried in
/// the URL. Children receive snapshots and report intents through callbacks.
#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let navigator = use_navigator().expect("navigator");

    let route_token = props
        .token
        .as_deref()
        .map(ConversationToken::from_path)
        .unwrap_or_default();

    let messages = use_state(Vec::<Message>::new);
    let conversations = use_state(Vec::<ConversationSummary>::new);
    let composer_text = use_state(String::new);
    let send_phase = use_state(SendPhase::default);
    let error_message = use_state(|| None::<String>);
    let upload_open = use_state(|| false);

    // Counts history refresh requests; bumped after a successful send or a
    // history selection so the sidebar re-fetches.
    let history_epoch = use_state(|| 0u32);

    // The token async responses are fenced against. Updated whenever the
    // route changes, including mid-flight navigations.
    let live_token = use_mut_ref(ConversationToken::default);

    // Armed before self-initiated navigation: the message list is already
    // consistent with the destination token, so the token-change effect
    // must not re-fetch it.
    let reload_guard = use_mut_ref(ReloadGuard::default);

    // Load messages when the active token changes (and on first mount).
    {
        let messages_handle = messages.clone();
        let error_handle = error_message.clone();
        let live_token = live_token.clone();
        let reload_guard = reload_guard.clone();
        use_effect_with(route_token.clone(), move |token| {
            *live_token.borrow_mut() = token.clone();

            match reload_guard.borrow_mut().resolve(token) {
                LoadAction::Keep => {}
                LoadAction::Clear => {
                    // Nothing to load for a new conversation; a stale error
                    // banner has no business on the home view either.
                    messages_handle.set(Vec::new());
                    error_handle.set(None);
                }
                LoadAction::Load => {
                    let token = token.clone();
                    let fence = TokenFence::capture(&token);
                    let live_token = live_token.clone();
                    spawn_local(async move {
                        let client = FinsightClient::shared();
                        match client.conversation_messages(&token).await {
                            Ok(response) => {
                                if fence.admits(&live_token.borrow()) {
                                    messages_handle.set(response.messages);
                                    error_handle.set(None);
                                }
                            }
                            Err(err) => {
                                if fence.admits(&live_token.borrow()) {
                                    messages_handle.set(Vec::new());
                                    let message = if err.is_not_found() {
                                        "Conversation not found".to_string()
                                    } else {
                                        format!("Failed to load conversation: {err}")
                                    };
                                    error_handle.set(Some(message));
                                }
                            }
                        }
                    });
                }
            }

            || ()
        });
    }

    // Refresh the conversation list on mount and on every epoch bump. A
    // failed refresh empties the sidebar rather than keeping stale rows.
    {
        let conversations_handle = conversations.clone();
        use_effect_with(*history_epoch, move |_| {
            spawn_local(async move {
                let client = FinsightClient::shared();
                match client.list_conversations().await {
                    Ok(summaries) => conversations_handle.set(summaries),
                    Err(_) => conversations_handle.set(Vec::new()),
                }
            });
            || ()
        });
    }

    let on_suggest = {
        let composer_text = composer_text.clone();
        Callback::from(move |question: String| composer_text.set(question))
    };

    let on_text_change = {
        let composer_text = composer_text.clone();
        Callback::from(move |value: String| composer_text.set(value))
    };

    let on_send = {
        let route_token = route_token.clone();
        let navigator = navigator.clone();
        let messages = messages.clone();
        let composer_text = composer_text.clone();
        let send_phase = send_phase.clone();
        let error = error_message.clone();
        let history_epoch = history_epoch.clone();
        let live_token = live_token.clone();
        let reload_guard = reload_guard.clone();
        Callback::from(move |()| {
            let Some(sending) = (*send_phase).begin() else {
                return;
            };

            let question = (*composer_text).trim().to_string();
            if question.is_empty() {
                return;
            }

            // Optimistic append: the user message and the cleared composer
            // are visible before the request is issued. No rollback on
            // failure; a retry produces a second, distinct message.
            let user_message = Message {
                id: Uuid::new_v4().to_string(),
                role: MessageRole::User,
                content: question.clone(),
                created_at: Timestamp(Utc::now()),
                sources: Vec::new(),
            };
            let mut appended = (*messages).clone();
            appended.push(user_message);
            messages.set(appended.clone());
            composer_text.set(String::new());
            send_phase.set(sending);

            let fence = TokenFence::capture(&route_token);
            let navigator = navigator.clone();
            let messages = messages.clone();
            let send_phase = send_phase.clone();
            let error = error.clone();
            let history_epoch = history_epoch.clone();
            let live_token = live_token.clone();
            let reload_guard = reload_guard.clone();
            spawn_local(async move {
                let client = FinsightClient::shared();
                let request = ChatRequest {
                    question,
                    conversation_token: fence.captured().clone(),
                };
                match client.send_chat(&request).await {
                    Ok(response) => {
                        send_phase.set(sending.settle());
                        if !fence.admits(&live_token.borrow()) {
                            // The user navigated away mid-flight; the server
                            // stored the exchange, but applying it here would
                            // corrupt the now-active conversation.
                            return;
                        }

                        let assistant_message = Message {
                            id: Uuid::new_v4().to_string(),
                            role: MessageRole::Assistant,
                            content: response.answer,
                            created_at: response
                                .created_at
                                .unwrap_or_else(|| Timestamp(Utc::now())),
                            sources: response.sources,
                        };
                        let mut next = appended;
                        next.push(assistant_message);
                        messages.set(next);
                        error.set(None);

                        // Adopt the (possibly minted) token as a pure
                        // history-state update; in-memory state survives.
                        let adopted = response.conversation_token;
                        if adopted != *fence.captured() {
                            reload_guard.borrow_mut().suppress(&adopted);
                            *live_token.borrow_mut() = adopted.clone();
                            navigator.push(&MainRoute::for_token(&adopted));
                        }

                        history_epoch.set(history_epoch.wrapping_add(1));
                    }
                    Err(err) => {
                        send_phase.set(sending.fail());
                        error.set(Some(format!("Failed to send message: {err}")));
                    }
                }
            });
        })
    };

    let on_select_conversation = {
        let navigator = navigator.clone();
        let messages = messages.clone();
        let error = error_message.clone();
        let history_epoch = history_epoch.clone();
        let live_token = live_token.clone();
        let reload_guard = reload_guard.clone();
        Callback::from(move |token: ConversationToken| {
            // Navigate first: the highlighted row is a pure function of the
            // route token, never stored separately. The selection handler
            // fetches the messages itself, so the token-change reload is
            // suppressed for this one destination.
            reload_guard.borrow_mut().suppress(&token);
            *live_token.borrow_mut() = token.clone();
            navigator.push(&MainRoute::for_token(&token));

            let fence = TokenFence::capture(&token);
            let messages = messages.clone();
            let error = error.clone();
            let live_token = live_token.clone();
            spawn_local(async move {
                let client = FinsightClient::shared();
                match client.conversation_messages(fence.captured()).await {
                    Ok(response) => {
                        if fence.admits(&live_token.borrow()) {
                            messages.set(response.messages);
                            error.set(None);
                        }
                    }
                    Err(err) => {
                        if fence.admits(&live_token.borrow()) {
                            messages.set(Vec::new());
                            error.set(Some(format!("Failed to load conversation: {err}")));
                        }
                    }
                }
            });

            // Re-fetch summaries to pick up server-side renames.
            history_epoch.set(history_epoch.wrapping_add(1));
        })
    };

    let on_new_conversation = {
        let navigator = navigator.clone();
        let composer_text = composer_text.clone();
        let error = error_message.clone();
        Callback::from(move |_: yew::MouseEvent| {
            composer_text.set(String::new());
            error.set(None);
            // The token-change effect clears the message list.
            navigator.push(&MainRoute::Home);
        })
    };

    let on_upload_open = {
        let upload_open = upload_open.clone();
        Callback::from(move |()| upload_open.set(true))
    };

    let on_upload_close = {
        let upload_open = upload_open.clone();
        Callback::from(move |_: yew::MouseEvent| upload_open.set(false))
    };

    let on_upload_complete = {
        let upload_open = upload_open.clone();
        let error = error_message.clone();
        Callback::from(move |_result: shared::models::UploadResponse| {
            error.set(None);
            upload_open.set(false);
        })
    };

    let on_error = {
        let error = error_message.clone();
        Callback::from(move |message: String| error.set(Some(message)))
    };

    html! {
        <>
            {
                (*error_message)
                    .clone()
                    .map_or_else(
                        || html! {},
                        |error| html! {
                            <div class="mb-4 rounded-md bg-red-50 p-4">
                                <p class="text-sm font-medium text-red-800">{ error }</p>
                            </div>
                        },
                    )
            }
            <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
                <div class="flex h-[calc(100vh-12rem)] relative">
                    <ChatHistory
                        conversations={(*conversations).clone()}
                        selected={route_token.clone()}
                        on_select={on_select_conversation}
                        on_new={on_new_conversation}
                    />
                    <div class="flex-1 flex flex-col">
                        <MessageList
                            messages={(*messages).clone()}
                            pending={send_phase.is_sending()}
                            on_suggest={on_suggest}
                        />
                        <Composer
                            text={(*composer_text).clone()}
                            on_text_change={on_text_change}
                            on_submit={on_send}
                            disabled={send_phase.is_sending()}
                            on_upload={on_upload_open}
                        />
                        { if *upload_open {
                            html! {
                                <div class="absolute inset-0 bg-black bg-opacity-50 flex items-center justify-center">
                                    <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md">
                                        <div class="flex justify-between items-center mb-4">
                                            <h3 class="text-lg font-medium text-gray-900">
                                                {"Upload Financial Document"}
                                            </h3>
                                            <button
                                                class="text-gray-400 hover:text-gray-600"
                                                type="button"
                                                onclick={on_upload_close}
                                            >
                                                {"✕"}
                                            </button>
                                        </div>
                                        <FileUpload
                                            on_complete={on_upload_complete}
                                            on_error={on_error}
                                        />
                                    </div>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </div>
        </>
    }
}
