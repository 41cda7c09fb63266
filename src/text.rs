//! Pure text utilities shared by the reader and the writer.

/// Canonical form of a key: ASCII lowercase, spaces turned into
/// underscores, so `Full Name`, `full name` and `full_name` all compare
/// equal. Keys in code are written in canonical form; documents may use
/// either spelling.
///
/// # Examples
/// ```
/// use mse_text::text::canonical_name_form;
///
/// assert_eq!(canonical_name_form("mse version"), "mse_version");
/// assert_eq!(canonical_name_form("Card Style"), "card_style");
/// ```
pub fn canonical_name_form(name: &str) -> String {
    name.chars()
        .map(|ch| if ch == ' ' { '_' } else { ch.to_ascii_lowercase() })
        .collect()
}

/// File form of a canonical name: underscores written back as spaces,
/// which is how keys appear in documents.
///
/// # Examples
/// ```
/// use mse_text::text::file_name_form;
///
/// assert_eq!(file_name_form("mse_version"), "mse version");
/// ```
pub fn file_name_form(name: &str) -> String {
    name.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_canonical_name_form() {
        assert_eq!(canonical_name_form("mse version"), "mse_version");
        assert_eq!(canonical_name_form("mse_version"), "mse_version");
        assert_eq!(canonical_name_form("Set Info"), "set_info");
        assert_eq!(canonical_name_form(""), "");
        assert_eq!(canonical_name_form(" "), "_");
    }

    #[rstest::rstest]
    fn test_file_name_form_inverts_canonical() {
        assert_eq!(file_name_form("mse_version"), "mse version");
        assert_eq!(
            canonical_name_form(&file_name_form("set_info")),
            "set_info"
        );
    }
}
