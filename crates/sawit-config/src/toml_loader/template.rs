//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Sawit Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# Key for the Generative Language API. Leave empty to run without a model;
# the SAWIT_API_KEY or GEMINI_API_KEY environment variables take precedence.
api_key = ""
# model = "gemma-3-4b-it"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# request_timeout_secs = 120   # 1-600

[generation]
# temperature = 0.85           # 0.0-2.0
# max_output_tokens = 1024     # 1-8192
# top_p = 0.9                  # 0.0-1.0

[chat]
# page = "Home"                # Profile | Skills | Projects | Contact | Home
# history_limit = 20           # 2-200
# display_limit = 50           # 1-1000
# display_key = "chat_history"
# history_key = "conv_history"
# notify_sound = true
# persona_path = "/path/to/persona.md"

[storage]
# dir = "/path/to/storage"

[logging]
# level = "INFO"               # DEBUG | INFO | WARNING | ERROR
"##
    .to_string()
}
