use shared::models::ConversationToken;

/// Captured-token guard for asynchronous responses.
///
/// Every send or history selection snapshots the token it was issued against.
/// When the response arrives, the result is applied only if the live token
/// still matches; otherwise the user has navigated away and the response is
/// stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFence {
    captured: ConversationToken,
}

impl TokenFence {
    /// Snapshot the token an async operation depends on.
    #[must_use]
    pub fn capture(current: &ConversationToken) -> Self {
        Self {
            captured: current.clone(),
        }
    }

    /// Whether a response computed against the captured token may still be
    /// applied.
    #[must_use]
    pub fn admits(&self, live: &ConversationToken) -> bool {
        self.captured == *live
    }

    /// The token the guarded operation was issued against.
    #[must_use]
    pub fn captured(&self) -> &ConversationToken {
        &self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_unchanged_token() {
        let token = ConversationToken::new("tok-1");
        let fence = TokenFence::capture(&token);
        assert!(fence.admits(&token));
    }

    #[test]
    fn test_discards_after_navigation() {
        let at_request = ConversationToken::new("tok-1");
        let fence = TokenFence::capture(&at_request);

        // User clicked a different history entry before the send resolved.
        let live = ConversationToken::new("tok-2");
        assert!(!fence.admits(&live));
    }

    #[test]
    fn test_empty_token_send_admitted_until_token_adopted() {
        // A send from a new conversation captures the empty token; it stays
        // valid as long as no other navigation happened.
        let empty = ConversationToken::default();
        let fence = TokenFence::capture(&empty);
        assert!(fence.admits(&ConversationToken::default()));
        assert!(!fence.admits(&ConversationToken::new("tok-1")));
    }
}
