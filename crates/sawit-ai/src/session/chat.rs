//! The send cycle: one request per accepted message.

use sawit_common::new_request_id;
use tracing::{debug, info, warn};

use crate::persona::{apology_for, NOT_CONFIGURED_NOTICE};
use crate::{AiClient, Turn};

use super::manager::{truncate_history, ChatSession};
use super::types::{BusyGuard, DisplayEntry, IgnoreReason, SendOutcome};

impl ChatSession {
    /// Send `user_text` with the whole conversation and record the reply.
    ///
    /// Empty input and sends made while a previous one is still waiting are
    /// dropped without touching any state. A failed request leaves the
    /// history exactly as it was before the call and shows an apology.
    pub async fn send(&self, client: &dyn AiClient, user_text: &str) -> SendOutcome {
        let text = user_text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored(IgnoreReason::Empty);
        }

        let Some(_guard) = BusyGuard::try_acquire(&self.busy) else {
            debug!("send dropped: a request is already in flight");
            return SendOutcome::Ignored(IgnoreReason::Busy);
        };

        let request_id = new_request_id();

        if !client.is_configured() {
            let mut t = self.transcript();
            self.push_display(&mut t, DisplayEntry::user(text));
            self.push_display(&mut t, DisplayEntry::bot(NOT_CONFIGURED_NOTICE));
            warn!(%request_id, "send skipped: no API key configured");
            return SendOutcome::Unconfigured;
        }

        let (payload, mut pending) = {
            let mut t = self.transcript();
            let pending = PendingTurn {
                session: self,
                rollback_len: t.history.len(),
                epoch: t.epoch,
                armed: true,
            };
            t.history.push(Turn::user(text));
            self.push_display(&mut t, DisplayEntry::user(text));
            (t.history.clone(), pending)
        };

        debug!(%request_id, turns = payload.len(), "sending chat turn");
        let result = client.send_message(&payload).await;

        pending.armed = false;
        let mut t = self.transcript();
        if t.epoch != pending.epoch {
            info!(%request_id, "reply dropped: session was reset while waiting");
            return SendOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                let reply = response.content;
                t.history.push(Turn::model(reply.clone()));
                truncate_history(&mut t.history, self.history_limit);
                self.push_display(&mut t, DisplayEntry::bot(reply.clone()));
                self.persist_history(&t);
                drop(t);

                debug!(
                    %request_id,
                    tokens = response.usage.total_tokens(),
                    "reply recorded"
                );
                if !self.is_open() {
                    self.play_notify_sound();
                }
                SendOutcome::Replied(reply)
            }
            Err(error) => {
                t.history.truncate(pending.rollback_len);
                let apology = apology_for(&error);
                self.push_display(&mut t, DisplayEntry::bot(apology.clone()));
                warn!(%request_id, "chat request failed: {error}");
                SendOutcome::Failed { apology, error }
            }
        }
    }

    fn play_notify_sound(&self) {
        if let Some(sound) = &self.notify_sound {
            if let Err(e) = sound() {
                debug!("notification cue unavailable: {e}");
            }
        }
    }
}

/// Rolls the tentative user turn back if the send future is dropped while
/// waiting for the reply.
struct PendingTurn<'a> {
    session: &'a ChatSession,
    rollback_len: usize,
    epoch: u64,
    armed: bool,
}

impl Drop for PendingTurn<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut t = self.session.transcript();
        if t.epoch == self.epoch {
            t.history.truncate(self.rollback_len);
            debug!("send cancelled: user turn rolled back");
        }
    }
}
