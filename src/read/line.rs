use memchr::memchr;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::text::canonical_name_form;

/// A decoded line split into its structural parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifiedLine {
    /// Count of leading tabs, possibly bumped by space-indent repair.
    pub indent: i32,
    /// Canonicalized key; empty for blank and comment lines.
    pub key: SmolStr,
    /// Raw text after the separator, leading whitespace trimmed. Empty
    /// means the value may continue on following indented lines.
    pub value: String,
}

/// Recoverable oddity found while classifying a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// The key started with spaces mixed into the tab indentation.
    SpaceIndent { key: String },
    /// No `:` separator on a non-blank line.
    MissingSeparator,
}

pub type Anomalies = SmallVec<[Anomaly; 2]>;

const REPAIR_RUN: &str = "        "; // SPACES_PER_TAB spaces

/// Split one decoded line into `(indent, key, value)`.
///
/// Indent is the number of leading tab characters; spaces never count.
/// A whitespace-only line, or one whose first character after the tabs is
/// `#`, is blank: empty key, no value, no anomaly. Otherwise the line
/// splits at the first `:` at or after the indent; with no separator the
/// whole remainder becomes the key and an anomaly is reported.
///
/// With `repair` set (strict mode, outside text blocks), a key that
/// starts with spaces is reported and every run of eight leading spaces
/// is converted into one extra indent level.
///
/// A line like `: value`, whose key is empty even though a separator is
/// present, gets the single-space placeholder key `" "`. That keeps an
/// empty named key distinguishable from a blank line, which older files
/// rely on.
pub fn classify(line: &str, repair: bool) -> (ClassifiedLine, Anomalies) {
    let mut anomalies = Anomalies::new();
    let bytes = line.as_bytes();

    let mut indent = 0usize;
    while indent < bytes.len() && bytes[indent] == b'\t' {
        indent += 1;
    }

    if bytes.iter().all(|&b| b == b' ' || b == b'\t') || bytes[indent] == b'#' {
        return (
            ClassifiedLine {
                indent: indent as i32,
                ..ClassifiedLine::default()
            },
            anomalies,
        );
    }

    let separator = memchr(b':', &bytes[indent..]).map(|pos| indent + pos);
    let mut key = match separator {
        Some(pos) => &line[indent..pos],
        None => &line[indent..],
    };

    if repair && key.starts_with(' ') {
        anomalies.push(Anomaly::SpaceIndent {
            key: key.to_owned(),
        });
        while let Some(stripped) = key.strip_prefix(REPAIR_RUN) {
            key = stripped;
            indent += 1;
        }
    }

    let value = match separator {
        Some(pos) => line[pos + 1..].trim_start().to_owned(),
        None => {
            anomalies.push(Anomaly::MissingSeparator);
            String::new()
        }
    };

    let canonical = canonical_name_form(key.trim());
    let key = if canonical.is_empty() && separator.is_some() {
        SmolStr::new(" ") // a colon with no name is a named key, not a blank line
    } else {
        SmolStr::new(canonical)
    };

    (
        ClassifiedLine {
            indent: indent as i32,
            key,
            value,
        },
        anomalies,
    )
}

#[cfg(test)]
mod tests {
    use crate::constants::SPACES_PER_TAB;

    use super::*;

    fn parts(line: &str) -> (i32, String, String) {
        let (classified, anomalies) = classify(line, true);
        assert!(anomalies.is_empty(), "unexpected anomalies: {anomalies:?}");
        (
            classified.indent,
            classified.key.to_string(),
            classified.value,
        )
    }

    #[rstest::rstest]
    fn test_repair_run_matches_constant() {
        assert_eq!(REPAIR_RUN.len(), SPACES_PER_TAB);
        assert!(REPAIR_RUN.bytes().all(|b| b == b' '));
    }

    #[rstest::rstest]
    fn test_simple_key_value() {
        assert_eq!(parts("name: Ada"), (0, "name".into(), "Ada".into()));
        assert_eq!(parts("\t\tcount: 5"), (2, "count".into(), "5".into()));
    }

    #[rstest::rstest]
    fn test_key_without_value() {
        assert_eq!(parts("set info:"), (0, "set_info".into(), String::new()));
    }

    #[rstest::rstest]
    fn test_value_keeps_inner_whitespace() {
        assert_eq!(
            parts("title:   spaced   out"),
            (0, "title".into(), "spaced   out".into())
        );
    }

    #[rstest::rstest]
    fn test_blank_and_comment_lines() {
        for line in ["", "   ", "\t\t", "# a comment", "\t# indented comment"] {
            let (classified, anomalies) = classify(line, true);
            assert!(classified.key.is_empty(), "line {line:?}");
            assert!(anomalies.is_empty());
        }
    }

    #[rstest::rstest]
    fn test_comment_needs_hash_right_after_tabs() {
        // a space before the '#' makes this a key, not a comment
        let (classified, anomalies) = classify("\t # note", false);
        assert_eq!(classified.key, "#_note");
        assert_eq!(anomalies.len(), 1);
        assert!(matches!(anomalies[0], Anomaly::MissingSeparator));
    }

    #[rstest::rstest]
    fn test_key_is_canonicalized() {
        assert_eq!(parts("Set Info: x").1, "set_info");
        assert_eq!(parts("mse version: 2.0.0").1, "mse_version");
    }

    #[rstest::rstest]
    fn test_missing_separator_reported() {
        let (classified, anomalies) = classify("\tjust a name", true);
        assert_eq!(classified.indent, 1);
        assert_eq!(classified.key, "just_a_name");
        assert!(classified.value.is_empty());
        assert_eq!(anomalies.len(), 1);
        assert!(matches!(anomalies[0], Anomaly::MissingSeparator));
    }

    #[rstest::rstest]
    fn test_eight_spaces_repair_to_one_indent() {
        let line = "        foo: 1";
        let (classified, anomalies) = classify(line, true);
        assert_eq!(classified.indent, 1);
        assert_eq!(classified.key, "foo");
        assert_eq!(classified.value, "1");
        assert_eq!(anomalies.len(), 1);
        assert!(matches!(anomalies[0], Anomaly::SpaceIndent { .. }));

        // sixteen spaces repair to two levels
        let line = "                bar: 2";
        let (classified, _) = classify(line, true);
        assert_eq!(classified.indent, 2);
        assert_eq!(classified.key, "bar");
    }

    #[rstest::rstest]
    fn test_no_repair_without_flag() {
        let (classified, anomalies) = classify("        foo: 1", false);
        assert_eq!(classified.indent, 0);
        assert_eq!(classified.key, "foo"); // trim still removes the spaces
        assert!(anomalies.is_empty());
    }

    #[rstest::rstest]
    fn test_placeholder_key_for_empty_named_key() {
        let (classified, _) = classify(": value", true);
        assert_eq!(classified.key, " ");
        assert_eq!(classified.value, "value");
    }
}
