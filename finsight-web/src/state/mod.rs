//! Pure client-state machines for the synchronizer.
//!
//! Kept out of the components so the send gate, the token fence and the
//! upload flow can be tested natively.

pub(crate) mod fence;
pub(crate) mod reload;
pub(crate) mod send;
pub(crate) mod upload;

pub use fence::TokenFence;
pub use reload::{LoadAction, ReloadGuard};
pub use send::SendPhase;
pub use upload::{UploadCandidate, UploadPhase};
