/// Gate around the single in-flight question exchange.
///
/// Only one send may be pending at a time; while `Sending` the composer is
/// disabled and further begin attempts are rejected. A failure keeps the
/// optimistic user message in place and the gate reopens for a retry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendPhase {
    /// No exchange pending.
    #[default]
    Idle,
    /// A question is on the wire; new sends are rejected.
    Sending,
    /// The last exchange failed; sends are allowed again.
    Failed,
}

impl SendPhase {
    /// Try to start a send. Returns the new phase, or `None` when a send is
    /// already pending.
    #[must_use]
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Idle | Self::Failed => Some(Self::Sending),
            Self::Sending => None,
        }
    }

    /// The pending exchange completed.
    #[must_use]
    pub const fn settle(self) -> Self {
        Self::Idle
    }

    /// The pending exchange failed; the gate reopens.
    #[must_use]
    pub const fn fail(self) -> Self {
        Self::Failed
    }

    /// Whether the send affordance should be disabled.
    #[must_use]
    pub const fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }
}
