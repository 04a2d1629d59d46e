//! Utility functions for label escaping in the bracket notation.
//!
//! Labels are written unquoted where possible (spaces become underscores)
//! and single-quoted otherwise, with internal single quotes doubled.

/// Bytes that end an unquoted label.
pub const LABEL_DELIMITERS: &[u8] = b"(),;[]'";

/// Checks if a label can be written without quotes, i.e. it is non-empty
/// and reads back as itself when unquoted.
///
/// # Examples
/// ```
/// # use trampwick::parser::utils::needs_quotes;
/// assert_eq!(needs_quotes("Pukeko"), false);
/// assert_eq!(needs_quotes("Swamp hen"), false); // written as Swamp_hen
/// assert_eq!(needs_quotes("Swamp_hen"), true);  // underscore would read back as space
/// assert_eq!(needs_quotes("Pu(ke)ko"), true);
/// assert_eq!(needs_quotes(""), true);           // unquoted empty is an empty subtree
/// ```
pub fn needs_quotes(label: &str) -> bool {
    label.is_empty()
        || label.bytes().any(|b| {
            LABEL_DELIMITERS.contains(&b) || b == b'_' || (b.is_ascii_whitespace() && b != b' ')
        })
}

/// Escapes a label for the bracket notation.
///
/// # Examples
/// ```
/// # use trampwick::parser::utils::escape_label;
/// assert_eq!(escape_label("Pukeko"), "Pukeko");
/// assert_eq!(escape_label("Australasian Swamphen"), "Australasian_Swamphen");
/// assert_eq!(escape_label("Baillon's Crake"), "'Baillon''s Crake'");
/// assert_eq!(escape_label("a,b"), "'a,b'");
/// assert_eq!(escape_label(""), "''");
/// ```
pub fn escape_label(label: &str) -> String {
    if needs_quotes(label) {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.replace(' ', "_")
    }
}
