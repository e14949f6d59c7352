use regex::Regex;
use std::sync::LazyLock;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(api_key|password|secret|token)=[^\s&"']+"#).unwrap()
});
static BEARER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[^\s\x22']+").unwrap());
static PROVIDER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(sk|gsk)[-_][A-Za-z0-9_-]{6,}").unwrap());

/// Shortens prompt text and masks credentials so it can be logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &trimmed[..cut], total_chars),
        None => trimmed.to_string(),
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let text = BEARER_TOKEN.replace_all(text, "Bearer [REDACTED]");
    let text = SECRET_ASSIGNMENT.replace_all(&text, "$1=[REDACTED]");
    PROVIDER_KEY.replace_all(&text, "[REDACTED]").into_owned()
}
