/// Words accepted as `true` by the boolean decoder. Case-sensitive.
pub const TRUE_WORDS: &[&str] = &["true", "1", "yes"];

/// Words accepted as `false` by the boolean decoder. Case-sensitive.
pub const FALSE_WORDS: &[&str] = &["false", "0", "no"];

/// The UTF-8 byte order mark an input stream may start with.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Number of leading spaces repaired into one indent level.
pub const SPACES_PER_TAB: usize = 8;

/// Key of the version block at the top of every document.
pub const VERSION_KEY: &str = "mse_version";

/// Date-and-time form values are written in.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only form accepted when reading.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inline capacity of the line accumulator. Most lines fit, so reading a
/// line normally costs no heap allocation.
pub(crate) const LINE_BUF_BYTES: usize = 1024;
