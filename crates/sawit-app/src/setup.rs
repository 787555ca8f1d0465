//! Wiring config into the client, the store, and the session.

use std::path::PathBuf;
use std::time::Duration;

use sawit_ai::{ChatSession, GeminiClient, GeminiConfig, PageContext};
use sawit_common::{KeyValueStore, MemoryStore, SawitError};
use sawit_config::SawitConfig;
use sawit_platform::FileStore;

/// Page from `--page` if given, else from config. Unknown names fall back
/// to Home with a warning.
pub fn resolve_page(cli_page: Option<&str>, config: &SawitConfig) -> PageContext {
    let raw = cli_page.unwrap_or(&config.chat.page);
    raw.parse().unwrap_or_else(|e| {
        tracing::warn!("{e}, using Home");
        PageContext::Home
    })
}

pub fn build_client(config: &SawitConfig) -> Result<GeminiClient, SawitError> {
    let gemini = GeminiConfig::new(config.api.api_key.clone())
        .with_model(config.api.model.clone())
        .with_base_url(config.api.base_url.clone())
        .with_max_tokens(config.generation.max_output_tokens)
        .with_temperature(config.generation.temperature)
        .with_top_p(config.generation.top_p)
        .with_request_timeout(Duration::from_secs(u64::from(
            config.api.request_timeout_secs,
        )));
    GeminiClient::new(gemini).map_err(|e| SawitError::Ai(e.to_string()))
}

pub fn storage_dir(config: &SawitConfig) -> Result<PathBuf, SawitError> {
    match &config.storage.dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(sawit_platform::storage_dir()?),
    }
}

pub fn open_store(config: &SawitConfig) -> Result<FileStore, SawitError> {
    let dir = storage_dir(config)?;
    tracing::debug!("chat storage at {}", dir.display());
    Ok(FileStore::open(dir)?)
}

/// The file store, or an in-memory one when the storage directory is
/// unusable. Chat keeps working either way; only persistence is lost.
pub fn open_store_or_memory(config: &SawitConfig) -> Box<dyn KeyValueStore> {
    match open_store(config) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("chat history will not be saved: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

/// Build a session for `page` from config. The caller initializes it.
pub fn build_session(
    config: &SawitConfig,
    page: PageContext,
    store: Box<dyn KeyValueStore>,
) -> ChatSession {
    let mut session = ChatSession::new(page, store)
        .with_limits(
            config.chat.history_limit as usize,
            config.chat.display_limit as usize,
        )
        .with_storage_keys(&config.chat.display_key, &config.chat.history_key);

    if let Some(path) = &config.chat.persona_path {
        match std::fs::read_to_string(path) {
            Ok(template) => session = session.with_preamble_template(&template),
            Err(e) => tracing::warn!(
                "failed to read persona template {}: {e}, using built-in persona",
                path.display()
            ),
        }
    }

    if config.chat.notify_sound {
        session = session.with_notify_sound(Box::new(sawit_platform::play_notification_cue));
    }

    session
}
