use super::model::EMPTY;

/// Convert `s` to a lowercase, underscore separated token.
///
/// A lowercase letter followed by an uppercase one starts a new word, and
/// every character that is not an ASCII letter or digit separates words.
/// Runs of separators collapse and leading/trailing ones are dropped, so the
/// result is empty exactly when `s` has no ASCII alphanumerics.
pub fn snake_case(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if prev_lower && c.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase();
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("_")
}

/// A path component for `s`: its snake case form, or `empty` when that
/// would leave nothing to name a directory or file with.
pub fn path_segment(s: &str) -> String {
    let snake = snake_case(s);
    if snake.is_empty() {
        snake_case(EMPTY)
    } else {
        snake
    }
}
