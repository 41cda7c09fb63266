//! The writing half of the format: the serializer the reader is paired
//! with one-to-one.

mod values;

use std::io::Write;

use crate::error::Result;
use crate::text::file_name_form;
use crate::types::Version;

pub use self::values::WritableValue;

/// Writer for one structured-text document.
///
/// Mirrors the reader's block operations: `enter_block`/`exit_block`
/// bracket nested structure, `write_value` emits one `key: value` line —
/// or an indented multi-line block when the value contains newlines.
/// Keys are given in canonical form and written in file form
/// (underscores as spaces).
///
/// ```
/// use mse_text::{Version, Writer};
///
/// let mut writer = Writer::new(Vec::new());
/// writer.app_version(Version::new(0, 1, 0))?;
/// writer.enter_block("set_info")?;
/// writer.write_value("title", &String::from("Alpha"))?;
/// writer.exit_block();
/// let text = String::from_utf8(writer.finish()?).unwrap();
/// assert_eq!(text, "mse version: 0.1.0\nset info:\n\ttitle: Alpha\n");
/// # Ok::<(), mse_text::Error>(())
/// ```
pub struct Writer<W> {
    output: W,
    indent: usize,
    tabs: String,
    scratch: String,
}

impl<W: Write> Writer<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            indent: 0,
            tabs: String::new(),
            scratch: String::new(),
        }
    }

    /// Write the version preamble. Every document starts with one; call
    /// this before anything else.
    pub fn app_version(&mut self, version: Version) -> Result<()> {
        self.write_value(crate::constants::VERSION_KEY, &version)
    }

    /// Open a nested block: writes `name:` and indents what follows.
    pub fn enter_block(&mut self, name: &str) -> Result<()> {
        self.write_indent()?;
        self.output.write_all(file_name_form(name).as_bytes())?;
        self.output.write_all(b":\n")?;
        self.indent += 1;
        Ok(())
    }

    /// Close the innermost open block.
    pub fn exit_block(&mut self) {
        assert!(self.indent > 0, "exit_block called with no block open");
        self.indent -= 1;
    }

    /// Write one value under `name`. A value with embedded newlines is
    /// written as a multi-line block, each line one level deeper; blank
    /// lines inside it are written indented so they survive a round trip.
    pub fn write_value<T: WritableValue>(&mut self, name: &str, value: &T) -> Result<()> {
        self.scratch.clear();
        value.write_text(&mut self.scratch);
        let text = std::mem::take(&mut self.scratch);

        self.write_indent()?;
        self.output.write_all(file_name_form(name).as_bytes())?;
        if text.is_empty() {
            self.output.write_all(b":\n")?;
        } else if text.contains('\n') {
            self.output.write_all(b":\n")?;
            self.indent += 1;
            for line in text.split('\n') {
                self.write_indent()?;
                self.output.write_all(line.as_bytes())?;
                self.output.write_all(b"\n")?;
            }
            self.indent -= 1;
        } else {
            self.output.write_all(b": ")?;
            self.output.write_all(text.as_bytes())?;
            self.output.write_all(b"\n")?;
        }

        self.scratch = text;
        Ok(())
    }

    /// Write a comment line at the current indent.
    pub fn write_comment(&mut self, comment: &str) -> Result<()> {
        self.write_indent()?;
        self.output.write_all(b"# ")?;
        self.output.write_all(comment.as_bytes())?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    /// Flush and return the underlying output.
    pub fn finish(mut self) -> Result<W> {
        assert!(self.indent == 0, "finish called with blocks still open");
        self.output.flush()?;
        Ok(self.output)
    }

    fn write_indent(&mut self) -> Result<()> {
        while self.tabs.len() < self.indent {
            self.tabs.push('\t');
        }
        self.output.write_all(self.tabs[..self.indent].as_bytes())?;
        Ok(())
    }
}
