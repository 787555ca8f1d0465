//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use sawit_common::PlatformError;
use serde::{Deserialize, Serialize};

use crate::AiError;

/// Callback that plays the notification cue. Failures are logged and
/// otherwise ignored by the session.
pub type NotifySound = Box<dyn Fn() -> Result<(), PlatformError> + Send + Sync>;

/// Who a display line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    User,
    Bot,
}

/// One rendered line of the chat window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEntry {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DisplayEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: EntryKind::Bot,
        }
    }
}

/// Why a send was dropped without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Nothing left after trimming.
    Empty,
    /// Another send is still waiting for its reply.
    Busy,
}

/// Result of one `ChatSession::send`.
#[derive(Debug)]
pub enum SendOutcome {
    /// Dropped before touching any state.
    Ignored(IgnoreReason),
    /// The model replied; the reply is in both logs.
    Replied(String),
    /// The request failed; the user turn was rolled back and `apology`
    /// was appended to the display log.
    Failed { apology: String, error: AiError },
    /// No credentials: the user line and a notice were displayed, nothing
    /// was sent.
    Unconfigured,
    /// The session was reset while the request was in flight; the reply
    /// was dropped.
    Discarded,
}

impl SendOutcome {
    /// The bot line this outcome added to the display log, if any.
    pub fn bot_text(&self) -> Option<&str> {
        match self {
            SendOutcome::Replied(text) => Some(text),
            SendOutcome::Failed { apology, .. } => Some(apology),
            SendOutcome::Unconfigured => Some(crate::persona::NOT_CONFIGURED_NOTICE),
            SendOutcome::Ignored(_) | SendOutcome::Discarded => None,
        }
    }
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Returns `None` if already busy.
    pub(crate) fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
