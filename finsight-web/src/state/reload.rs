use shared::models::ConversationToken;

/// What the message store must do when the location token changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    /// Fetch the conversation's messages from the backend.
    Load,
    /// Drop the list (and any error banner); nothing to fetch.
    Clear,
    /// The in-memory list is already consistent; leave it alone.
    Keep,
}

/// Suppresses the re-fetch that would otherwise follow a self-initiated
/// navigation.
///
/// After a send adopts a minted token or a history row is selected, the
/// message list is already consistent with the destination, so the
/// token-change reload must be skipped exactly once. The suppression is
/// scoped to the token it was armed for: a navigation to any other token
/// discards it and loads normally, so an armed-but-unconsumed suppression
/// (the location never actually changed) cannot leak into a later
/// navigation.
#[derive(Debug, Default)]
pub struct ReloadGuard {
    suppressed: Option<ConversationToken>,
}

impl ReloadGuard {
    /// Arm the guard before navigating to `token` with consistent state.
    pub fn suppress(&mut self, token: &ConversationToken) {
        self.suppressed = Some(token.clone());
    }

    /// Decide the store action for the now-active `token`, consuming any
    /// armed suppression.
    pub fn resolve(&mut self, token: &ConversationToken) -> LoadAction {
        let suppressed = self.suppressed.take();
        if suppressed.as_ref() == Some(token) {
            LoadAction::Keep
        } else if token.is_empty() {
            LoadAction::Clear
        } else {
            LoadAction::Load
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fence::TokenFence;
    use crate::state::send::SendPhase;

    #[test]
    fn test_mount_loads_active_conversation() {
        let mut guard = ReloadGuard::default();
        assert_eq!(
            guard.resolve(&ConversationToken::new("tok-1")),
            LoadAction::Load
        );
    }

    #[test]
    fn test_home_clears() {
        let mut guard = ReloadGuard::default();
        assert_eq!(guard.resolve(&ConversationToken::default()), LoadAction::Clear);
    }

    #[test]
    fn test_self_initiated_navigation_keeps_state() {
        let token = ConversationToken::new("tok-1");
        let mut guard = ReloadGuard::default();

        guard.suppress(&token);
        assert_eq!(guard.resolve(&token), LoadAction::Keep);
    }

    #[test]
    fn test_suppression_consumed_once() {
        let token = ConversationToken::new("tok-1");
        let mut guard = ReloadGuard::default();

        guard.suppress(&token);
        assert_eq!(guard.resolve(&token), LoadAction::Keep);
        // A later arrival at the same token (browser back/forward) loads.
        assert_eq!(guard.resolve(&token), LoadAction::Load);
    }

    #[test]
    fn test_unconsumed_suppression_does_not_leak_to_home() {
        // Re-selecting the already-active conversation arms the guard but
        // the location never changes, so nothing consumes it. Going home
        // afterwards must still clear the list.
        let active = ConversationToken::new("tok-1");
        let mut guard = ReloadGuard::default();

        guard.suppress(&active);
        assert_eq!(guard.resolve(&ConversationToken::default()), LoadAction::Clear);
        // And the stale arm is gone for good.
        assert_eq!(guard.resolve(&active), LoadAction::Load);
    }

    #[test]
    fn test_unconsumed_suppression_does_not_leak_to_other_conversation() {
        let mut guard = ReloadGuard::default();

        guard.suppress(&ConversationToken::new("tok-1"));
        assert_eq!(
            guard.resolve(&ConversationToken::new("tok-2")),
            LoadAction::Load
        );
    }

    #[test]
    fn test_first_send_adopts_minted_token() {
        // A send from a fresh conversation: one gate, one fence, and a
        // reload-free adoption of the minted token.
        let home = ConversationToken::default();
        let mut guard = ReloadGuard::default();
        assert_eq!(guard.resolve(&home), LoadAction::Clear);

        let phase = SendPhase::Idle.begin().unwrap();
        let fence = TokenFence::capture(&home);

        // Response arrives while the empty token is still active.
        assert!(fence.admits(&home));
        assert_eq!(phase.settle(), SendPhase::Idle);

        let minted = ConversationToken::new("tok-1");
        guard.suppress(&minted);
        assert_eq!(guard.resolve(&minted), LoadAction::Keep);
    }
}
