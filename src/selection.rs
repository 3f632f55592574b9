//! Parsing of comma-separated selection inputs.
//!
//! Workflow inputs arrive as a single string such as `"aws, gcp"`. An empty
//! input means "use the defaults", anything else replaces them entirely.

/// Separator between tokens in a selection string.
const TOKEN_SEPARATOR: char = ',';

/// Splits a selection string into its tokens, falling back to `default_value`
/// when `user_input` is empty.
///
/// Only literal spaces are stripped; tabs and newlines are left alone. Empty
/// tokens are dropped, duplicates are kept, and order is preserved.
///
/// ```
/// use matrix_preview::selected_list;
///
/// assert_eq!(selected_list("", "aws,gcp"), ["aws", "gcp"]);
/// assert_eq!(selected_list("aws,,gcp,", "azure"), ["aws", "gcp"]);
/// ```
pub fn selected_list(user_input: &str, default_value: &str) -> Vec<String> {
    let raw_value = if user_input.is_empty() {
        default_value
    } else {
        user_input
    };

    raw_value
        .replace(' ', "")
        .split(TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
