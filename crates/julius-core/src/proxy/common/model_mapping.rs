//! Model name mapping from OpenAI-style identifiers to Julius display names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Backend model used for any identifier not in the table.
pub const DEFAULT_BACKEND_MODEL: &str = "GPT-4o mini";

/// Static mapping from client-facing model keys to Julius model selections.
static CLIENT_TO_JULIUS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("gpt-4o-mini", "GPT-4o mini"),
        ("claude-haiku", "Claude Haiku"),
        ("llama-3", "Llama 3"),
        ("gemini-1.5", "Gemini 1.5"),
        ("gemini-flash", "Gemini Flash"),
        ("command-r", "Command R"),
    ])
});

/// Maps a client model identifier to the backend display name.
///
/// Total: unknown identifiers (including the empty string) resolve to
/// [`DEFAULT_BACKEND_MODEL`]. Lookup is exact and case-sensitive.
#[must_use]
pub fn resolve_backend_model(client_model: &str) -> &'static str {
    CLIENT_TO_JULIUS.get(client_model).copied().unwrap_or(DEFAULT_BACKEND_MODEL)
}

/// Get all client-facing model keys, sorted.
#[must_use]
pub fn supported_models() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = CLIENT_TO_JULIUS.keys().copied().collect();
    keys.sort_unstable();
    keys
}
