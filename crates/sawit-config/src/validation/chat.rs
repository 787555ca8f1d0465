//! Chat window and storage key validation.

use sawit_common::storage::validate_key;

use crate::schema::SawitConfig;

use super::helpers::validate_range;

/// Validate chat window sizes and storage keys.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &SawitConfig) {
    let chat = &config.chat;
    validate_range(errors, "chat.history_limit", chat.history_limit, 2, 200);
    validate_range(errors, "chat.display_limit", chat.display_limit, 1, 1000);

    for (name, key) in [
        ("chat.display_key", &chat.display_key),
        ("chat.history_key", &chat.history_key),
    ] {
        if validate_key(key).is_err() {
            errors.push(format!(
                "{name} = {key:?} must be 1-64 letters, digits, '_' or '-'"
            ));
        }
    }
    if chat.display_key == chat.history_key {
        errors.push("chat.display_key and chat.history_key must differ".into());
    }
}
