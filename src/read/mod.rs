//! The reading half of the format: a streaming, schema-driven reader
//! over nested `key: value` blocks.

mod bytes;
mod enums;
mod line;
mod lines;
mod values;

use std::io::Read;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::constants::VERSION_KEY;
use crate::diag::{MessageSink, Severity, Warning};
use crate::error::{Error, Result};
use crate::options::ReaderOptions;
use crate::types::Version;

pub use self::enums::EnumReader;
pub use self::line::{classify, Anomalies, Anomaly, ClassifiedLine};
pub use self::lines::{LineError, LineReader};
pub use self::values::ReadableValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No key consumed yet.
    Outside,
    /// Positioned on a block's own key line, not yet descended into it.
    Entered,
    /// The current key/value has been consumed.
    Handled,
    /// The previous value is re-delivered by the next `read_value`.
    Unhandled,
}

/// Streaming reader for one structured-text document.
///
/// A reader binds to one input stream for its whole lifetime. The caller
/// drives it with `enter_block`/`handle`/`exit_block` calls mirroring the
/// expected document structure; the reader advances through the line
/// stream accordingly, skipping unrecognized trailing structure and
/// recording warnings for anomalies it can recover from. Only
/// encoding-level or structured-value corruption aborts a parse.
///
/// ```
/// use mse_text::{Reader, ReaderOptions};
///
/// let text = "mse version: 0.1.0\nset info:\n\ttitle: Alpha\n";
/// let mut reader = Reader::from_str(text, "example.mse-set", &ReaderOptions::new())?;
/// let mut title = String::new();
/// if reader.enter_block("set_info")? {
///     if reader.enter_block("title")? {
///         reader.handle(&mut title)?;
///         reader.exit_block()?;
///     }
///     reader.exit_block()?;
/// }
/// assert_eq!(title, "Alpha");
/// # Ok::<(), mse_text::Error>(())
/// ```
pub struct Reader<R> {
    lines: LineReader<R>,
    filename: String,
    lenient: bool,
    app_version: Option<Version>,
    sink: Arc<dyn MessageSink>,

    state: State,
    /// Indent of the current line; -1 once the input is exhausted, which
    /// is below any real indent so block-exit loops terminate at EOF.
    indent: i32,
    /// Indent that lines of the currently open block must have.
    expected_indent: i32,
    key: SmolStr,
    value: String,
    line: String,
    previous_value: String,
    line_number: usize,
    previous_line_number: usize,

    file_app_version: Version,
    warnings: Vec<Warning>,
}

impl<'a> Reader<&'a [u8]> {
    /// Reader over an in-memory document.
    pub fn from_str(
        input: &'a str,
        filename: impl Into<String>,
        options: &ReaderOptions,
    ) -> Result<Self> {
        Reader::new(input.as_bytes(), filename, options)
    }
}

impl<R: Read> Reader<R> {
    /// Construct a reader and consume the document's version preamble.
    ///
    /// The leading `mse_version` block, when present, is read before the
    /// caller sees anything; a file declaring a version newer than
    /// `options.app_version` queues a non-fatal notice on the sink.
    pub fn new(input: R, filename: impl Into<String>, options: &ReaderOptions) -> Result<Self> {
        let lines = match LineReader::new(input) {
            Ok(lines) => lines,
            Err(err) => return Err(annotate(err, 1)),
        };
        let mut reader = Self {
            lines,
            filename: filename.into(),
            lenient: options.lenient,
            app_version: options.app_version,
            sink: Arc::clone(&options.sink),
            state: State::Outside,
            indent: 0,
            expected_indent: 0,
            key: SmolStr::default(),
            value: String::new(),
            line: String::new(),
            previous_value: String::new(),
            line_number: 0,
            previous_line_number: 0,
            file_app_version: Version::default(),
            warnings: Vec::new(),
        };
        reader.move_next()?;
        reader.read_app_version()?;
        Ok(reader)
    }

    /// Version the document declares in its `mse_version` preamble;
    /// zero when the preamble was missing.
    pub fn file_app_version(&self) -> Version {
        self.file_app_version
    }

    /// Canonicalized key of the current line.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw inline value of the current line (text after the separator).
    /// Empty for a key that opens a block or a multi-line value.
    pub fn inline_value(&self) -> &str {
        &self.value
    }

    /// Indent of the current line; -1 at end of input.
    pub fn indent(&self) -> i32 {
        self.indent
    }

    /// Indent that lines of the currently open block must have.
    pub fn expected_indent(&self) -> i32 {
        self.expected_indent
    }

    /// 1-based number of the most recently read line.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    // ----- block structure ---------------------------------------------

    /// Enter a nested block regardless of its key. Succeeds iff the
    /// current line sits at the expected indent; on failure nothing is
    /// consumed, so callers can probe for "is there a block here at all".
    pub fn enter_any_block(&mut self) -> Result<bool> {
        if self.state == State::Entered {
            // on the key of the parent block, first move inside it
            self.move_next()?;
        }
        if self.indent != self.expected_indent {
            return Ok(false);
        }
        self.state = State::Entered;
        self.expected_indent += 1;
        Ok(true)
    }

    /// Enter the nested block named `name` (canonical form). The primary
    /// mechanism for schema-driven descent: callers try each expected key
    /// in turn and take the branch that matches.
    pub fn enter_block(&mut self, name: &str) -> Result<bool> {
        if self.state == State::Entered {
            self.move_next()?;
        }
        if self.indent != self.expected_indent {
            return Ok(false);
        }
        if self.key == name {
            self.state = State::Entered;
            self.expected_indent += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Leave the innermost open block, discarding whatever of it the
    /// caller did not consume. Unknown trailing structure is the format's
    /// tolerance mechanism: in lenient mode it vanishes silently, in
    /// strict mode each discarded key is reported as a warning (unless
    /// the caller never descended into the block, which is the idiom for
    /// deliberately skipping it whole).
    pub fn exit_block(&mut self) -> Result<()> {
        assert!(
            self.expected_indent > 0,
            "exit_block called with no block open"
        );
        self.expected_indent -= 1;
        assert!(
            self.state != State::Unhandled,
            "exit_block called with a pushed-back value pending"
        );
        self.previous_value.clear();
        let report_discarded = !self.lenient && self.state != State::Entered;
        if self.state == State::Entered {
            self.move_next()?; // leave this key
        }
        while self.indent > self.expected_indent {
            if report_discarded && !self.key.is_empty() {
                let message = format!("Unexpected key: '{}'", self.key);
                self.warning_on_line(self.line_number, message);
            }
            self.move_next()?;
        }
        self.state = State::Handled;
        Ok(())
    }

    /// React to a key the caller does not recognize: skip it and
    /// everything nested under it. Strict mode reports it first. A line
    /// below the expected indent is left alone; it may be a nameless
    /// value the caller will still consume.
    pub fn unknown_key(&mut self) -> Result<()> {
        if self.lenient {
            loop {
                self.move_next()?;
                if self.indent <= self.expected_indent {
                    return Ok(());
                }
            }
        }
        if self.indent >= self.expected_indent {
            let message = format!("Unexpected key: '{}'", self.key);
            self.warning_on_line(self.line_number, message);
            loop {
                self.move_next()?;
                if self.indent <= self.expected_indent {
                    break;
                }
            }
        }
        Ok(())
    }

    /// Mark the current value as not consumed after all: the next
    /// `read_value` returns it again without reading input. One-shot
    /// pushback for lookahead patterns.
    pub fn unhandle(&mut self) {
        assert!(
            self.state == State::Handled,
            "unhandle called with no handled value"
        );
        self.state = State::Unhandled;
    }

    /// Decode the value under the current key into `out`. Each key may be
    /// handled at most once.
    pub fn handle<T: ReadableValue>(&mut self, out: &mut T) -> Result<()> {
        T::read_from(self, out)
    }

    /// Skip the block `name` entirely when the file predates
    /// `end_version` — for keys old versions wrote that are no longer
    /// used.
    pub fn handle_ignore(&mut self, end_version: Version, name: &str) -> Result<()> {
        if self.file_app_version < end_version && self.enter_block(name)? {
            self.exit_block()?;
        }
        Ok(())
    }

    // ----- values ------------------------------------------------------

    /// Extract the raw text value of the current key and advance.
    ///
    /// A non-empty inline value is a simple scalar. An empty one starts a
    /// multi-line block: every following line indented at least to the
    /// expected level contributes its text (indent prefix stripped),
    /// joined by newlines. Blank or under-indented lines inside the run
    /// become embedded newlines when more properly indented text follows;
    /// a run of them that ends the block does not.
    pub fn read_value(&mut self) -> Result<String> {
        assert!(
            self.state != State::Handled,
            "read_value called twice for one key"
        );
        if self.state == State::Unhandled {
            self.state = State::Handled;
            return Ok(self.previous_value.clone());
        }
        if !self.value.is_empty() {
            self.previous_value = std::mem::take(&mut self.value);
            self.move_next()?;
            return Ok(self.previous_value.clone());
        }

        // a multi-line value
        self.previous_value.clear();
        let mut pending_newlines = 0;
        self.read_line(true)?;
        self.previous_line_number = self.line_number;
        while self.indent >= self.expected_indent && !self.lines.eof() {
            for _ in 0..pending_newlines {
                self.previous_value.push('\n');
            }
            pending_newlines = 0;
            let prefix = self.expected_indent as usize; // leading tabs, one byte each
            self.previous_value.push_str(&self.line[prefix..]);
            loop {
                self.read_line(true)?;
                pending_newlines += 1;
                // skip blank lines that are not indented enough
                let blank = self.line.trim().is_empty();
                if !(blank && self.indent < self.expected_indent && !self.lines.eof()) {
                    break;
                }
            }
        }
        // move_next, minus the initial line read
        self.state = State::Handled;
        while self.key.is_empty() && !self.lines.eof() {
            self.read_line(false)?;
        }
        if self.key.is_empty() && self.lines.eof() {
            self.line_number += 1;
            self.indent = -1;
        }
        if self.indent >= self.expected_indent {
            self.warning_on_line(
                self.line_number.saturating_sub(1),
                "Blank line or comment in text block, that is insufficiently indented.\n\
                 \t\tEither indent the comment/blank line, or add a 'key:' after it.",
            );
        }
        Ok(self.previous_value.clone())
    }

    // ----- warnings ----------------------------------------------------

    /// Record a warning about the most recently consumed value.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(Warning {
            line: self.previous_line_number,
            message: message.into(),
        });
    }

    fn warning_on_line(&mut self, line: usize, message: impl Into<String>) {
        self.warnings.push(Warning {
            line,
            message: message.into(),
        });
    }

    /// Warnings accumulated so far, in the order they were raised.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Flush accumulated warnings to the sink as one aggregated message.
    pub fn show_warnings(&mut self) {
        if self.warnings.is_empty() {
            return;
        }
        let mut text = format!("Warnings while reading file:\n{}", self.filename);
        for warning in &self.warnings {
            text.push_str(&format!("\nOn line {}: \t{}", warning.line, warning.message));
        }
        self.sink.message(Severity::Warning, &text);
        self.warnings.clear();
    }

    // ----- line advancement --------------------------------------------

    /// Advance to the next meaningful line, skipping blank and comment
    /// lines. At end of input `indent` becomes -1.
    fn move_next(&mut self) -> Result<()> {
        self.previous_line_number = self.line_number;
        self.state = State::Handled;
        self.key = SmolStr::default();
        self.indent = -1; // if no line is read it never has the expected indent
        while self.key.is_empty() && !self.lines.eof() {
            self.read_line(false)?;
        }
        if self.key.is_empty() && self.lines.eof() {
            self.line_number += 1;
            self.indent = -1;
        }
        Ok(())
    }

    /// Read and classify one line. Inside text blocks (`in_text_block`)
    /// anomaly reporting and space repair are off; the raw line text is
    /// what matters there.
    fn read_line(&mut self, in_text_block: bool) -> Result<()> {
        self.line_number += 1;
        self.line = match self.lines.read_line() {
            Ok(line) => line,
            Err(err) => return Err(annotate(err, self.line_number)),
        };
        let repair = !self.lenient && !in_text_block;
        let (classified, anomalies) = classify(&self.line, repair);
        if repair {
            for anomaly in &anomalies {
                let message = match anomaly {
                    Anomaly::SpaceIndent { key } => format!(
                        "key: '{key}' starts with a space; only use TABs for indentation!"
                    ),
                    Anomaly::MissingSeparator => "Missing ':'".to_owned(),
                };
                self.warning_on_line(self.line_number, message);
            }
        }
        self.indent = classified.indent;
        self.key = classified.key;
        self.value = classified.value;
        Ok(())
    }

    fn read_app_version(&mut self) -> Result<()> {
        if self.enter_block(VERSION_KEY)? {
            let mut version = Version::default();
            self.handle(&mut version)?;
            self.file_app_version = version;
            if let Some(app_version) = self.app_version {
                if app_version < self.file_app_version {
                    let text = format!(
                        "The file '{}' was made with a newer version ({}) of the program \
                         and may not load correctly.",
                        self.filename, self.file_app_version
                    );
                    self.sink.message(Severity::Warning, &text);
                }
            }
            self.exit_block()?;
        }
        Ok(())
    }
}

fn annotate(err: LineError, line: usize) -> Error {
    match err {
        LineError::Io(err) => Error::Io(err),
        LineError::InvalidUtf8 => Error::InvalidUtf8 { line },
    }
}
