//! String escaping for the line-oriented hook payload.

/// Escape a context string for embedding in a double-quoted JSON field.
///
/// Replacement order is load-bearing: backslashes first, then quotes, then
/// newlines — escaping newlines earlier would double-escape the backslash
/// introduced by `\n`.
pub fn escape_context(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
