/// Map user input to the canonical key form (`.com`).
///
/// Empty, whitespace-only and lone-dot input is returned unchanged; callers
/// should treat such a value as "likely invalid" rather than a key.
pub fn normalize(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "." {
        return input.to_string();
    }

    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('.') {
        lowered
    } else {
        format!(".{}", lowered)
    }
}
