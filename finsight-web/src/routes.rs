use crate::containers::layout::Layout;
use crate::pages::ChatPage;
use shared::models::ConversationToken;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes: the active conversation token is the sole path segment.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/:token")]
    Conversation { token: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Resolve the conversation token this route denotes (empty at home).
    #[must_use]
    pub fn active_token(&self) -> ConversationToken {
        match self {
            Self::Home | Self::NotFound => ConversationToken::default(),
            Self::Conversation { token } => ConversationToken::new(token.clone()),
        }
    }

    /// The route reflecting a token, used for programmatic navigation.
    #[must_use]
    pub fn for_token(token: &ConversationToken) -> Self {
        if token.is_empty() {
            Self::Home
        } else {
            Self::Conversation {
                token: token.as_str().to_string(),
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! {
            <Layout>
                <ChatPage />
            </Layout>
        },
        MainRoute::Conversation { token } => html! {
            <Layout>
                <ChatPage token={Some(token)} />
            </Layout>
        },
        MainRoute::NotFound => html! { <Redirect<MainRoute> to={MainRoute::Home} /> },
    }
}
