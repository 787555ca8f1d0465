//! Session struct, lifecycle, and transcript bookkeeping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use sawit_common::KeyValueStore;
use tracing::{debug, info};

use crate::context::PageContext;
use crate::persona::{render_preamble, DEFAULT_PREAMBLE_TEMPLATE};
use crate::Turn;

use super::persist;
use super::types::{DisplayEntry, NotifySound};

/// Turns kept in the conversation history, seed pair included.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;
/// Lines kept in the display log.
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;

/// Mutable state, only ever touched under the session mutex.
#[derive(Debug, Default)]
pub(super) struct Transcript {
    pub(super) history: Vec<Turn>,
    pub(super) display: Vec<DisplayEntry>,
    /// Bumped on every reset so in-flight replies can tell they are stale.
    pub(super) epoch: u64,
}

/// A chat session: conversation history, display log, and their storage.
pub struct ChatSession {
    pub(super) page: PageContext,
    /// Preamble sent as the first user turn.
    pub(super) preamble: String,
    pub(super) history_limit: usize,
    pub(super) display_limit: usize,
    pub(super) display_key: String,
    pub(super) history_key: String,
    pub(super) store: Box<dyn KeyValueStore>,
    pub(super) transcript: Mutex<Transcript>,
    /// Whether a send is waiting for its reply.
    pub(super) busy: AtomicBool,
    /// Whether the chat window is visible. Starts hidden.
    pub(super) open: AtomicBool,
    pub(super) notify_sound: Option<NotifySound>,
}

impl ChatSession {
    pub fn new(page: PageContext, store: Box<dyn KeyValueStore>) -> Self {
        let preamble = render_preamble(DEFAULT_PREAMBLE_TEMPLATE, page);
        let transcript = Transcript {
            history: seed_pair(&preamble, page),
            display: Vec::new(),
            epoch: 0,
        };
        Self {
            page,
            preamble,
            history_limit: DEFAULT_HISTORY_LIMIT,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            display_key: "chat_history".to_string(),
            history_key: "conv_history".to_string(),
            store,
            transcript: Mutex::new(transcript),
            busy: AtomicBool::new(false),
            open: AtomicBool::new(false),
            notify_sound: None,
        }
    }

    /// Replace the built-in persona. `{page}` in `template` becomes the page label.
    pub fn with_preamble_template(mut self, template: &str) -> Self {
        self.preamble = render_preamble(template, self.page);
        self.transcript
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .history = seed_pair(&self.preamble, self.page);
        self
    }

    /// History limit is clamped so the seed pair always fits.
    pub fn with_limits(mut self, history_limit: usize, display_limit: usize) -> Self {
        self.history_limit = history_limit.max(2);
        self.display_limit = display_limit.max(1);
        self
    }

    pub fn with_storage_keys(
        mut self,
        display_key: impl Into<String>,
        history_key: impl Into<String>,
    ) -> Self {
        self.display_key = display_key.into();
        self.history_key = history_key.into();
        self
    }

    pub fn with_notify_sound(mut self, sound: NotifySound) -> Self {
        self.notify_sound = Some(sound);
        self
    }

    /// Restore both logs from storage, or start a fresh conversation.
    ///
    /// The stored history is only trusted alongside a non-empty stored
    /// display log; otherwise the seed pair and a greeting are used.
    pub fn initialize(&self) {
        let mut t = self.transcript();
        t.epoch += 1;

        match persist::load_display(self.store.as_ref(), &self.display_key) {
            Some(mut display) => {
                truncate_front(&mut display, self.display_limit);
                t.display = display;
                t.history = persist::load_history(self.store.as_ref(), &self.history_key)
                    .unwrap_or_else(|| seed_pair(&self.preamble, self.page));
                truncate_history(&mut t.history, self.history_limit);
                info!(
                    page = %self.page,
                    display = t.display.len(),
                    history = t.history.len(),
                    "chat session restored"
                );
            }
            None => {
                t.history = seed_pair(&self.preamble, self.page);
                t.display = vec![DisplayEntry::bot(self.page.greeting())];
                info!(page = %self.page, "chat session started");
            }
        }
    }

    /// Forget everything: clear storage, re-seed the history, and show a
    /// single greeting line.
    pub fn reset(&self) {
        let mut t = self.transcript();
        t.epoch += 1;
        t.history = seed_pair(&self.preamble, self.page);
        t.display = vec![DisplayEntry::bot(self.page.greeting())];
        persist::clear(
            self.store.as_ref(),
            [self.display_key.as_str(), self.history_key.as_str()],
        );
        info!(page = %self.page, "chat session reset");
    }

    pub fn page(&self) -> PageContext {
        self.page
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Snapshot of the conversation history, in payload order.
    pub fn history(&self) -> Vec<Turn> {
        self.transcript().history.clone()
    }

    /// Snapshot of the display log, oldest first.
    pub fn display_log(&self) -> Vec<DisplayEntry> {
        self.transcript().display.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Mark the chat window as shown or hidden.
    pub fn set_open(&self, open: bool) {
        debug!(open, "chat window toggled");
        self.open.store(open, Ordering::Release);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub(super) fn transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a display line, trim to the window, and persist.
    pub(super) fn push_display(&self, t: &mut Transcript, entry: DisplayEntry) {
        t.display.push(entry);
        truncate_front(&mut t.display, self.display_limit);
        persist::save_display(
            self.store.as_ref(),
            &self.display_key,
            &t.display,
            self.display_limit,
        );
    }

    pub(super) fn persist_history(&self, t: &Transcript) {
        persist::save_history(
            self.store.as_ref(),
            &self.history_key,
            &t.history,
            self.history_limit,
        );
    }
}

pub(super) fn seed_pair(preamble: &str, page: PageContext) -> Vec<Turn> {
    vec![Turn::user(preamble), Turn::model(page.greeting())]
}

/// Keep the seed pair and the most recent turns so that at most `limit`
/// turns remain.
pub(super) fn truncate_history(history: &mut Vec<Turn>, limit: usize) {
    let limit = limit.max(2);
    if history.len() > limit {
        let excess = history.len() - limit;
        history.drain(2..2 + excess);
    }
}

fn truncate_front<T>(items: &mut Vec<T>, limit: usize) {
    if items.len() > limit {
        let excess = items.len() - limit;
        items.drain(..excess);
    }
}
