//! Persona preamble and the fixed bot lines the session falls back on.

use crate::context::PageContext;
use crate::AiError;

/// Built-in preamble template. `{page}` is replaced with the page label.
pub const DEFAULT_PREAMBLE_TEMPLATE: &str = include_str!("prompts/persona.md");

/// Placeholder substituted with the page-context label.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Shown when the request never produced a readable answer.
pub const CONNECTION_APOLOGY: &str =
    "Gagal terhubung ke AI. Pastikan koneksi internet kamu lancar ya! 🌐";

/// Shown when the service answered with something other than text or an error.
pub const UNEXPECTED_APOLOGY: &str = "Maaf, respons tidak terduga 😅 Coba lagi ya!";

/// Shown instead of calling out when no API key is configured.
pub const NOT_CONFIGURED_NOTICE: &str =
    "⚠️ API key belum di-set. Tambahkan api_key di config.toml atau set SAWIT_API_KEY ya!";

/// Render the preamble for `page` from `template`.
pub fn render_preamble(template: &str, page: PageContext) -> String {
    template.replace(PAGE_PLACEHOLDER, page.label())
}

/// The bot line shown for a failed send.
pub fn apology_for(error: &AiError) -> String {
    match error {
        AiError::ApiError(message) => format!(
            "Maaf, ada error dari API: {} 😅",
            message.as_deref().unwrap_or("Unknown error")
        ),
        AiError::UnexpectedResponse(_) => UNEXPECTED_APOLOGY.to_string(),
        AiError::NetworkError(_) | AiError::ParseError(_) | AiError::Timeout => {
            CONNECTION_APOLOGY.to_string()
        }
    }
}
