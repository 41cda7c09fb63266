use std::io::Read;

use crate::error::{Error, Result};

use super::Reader;

/// Decoder for one-of-N textual enumerations.
///
/// The caller offers each candidate literal in turn via [`handle`]; the
/// helper remembers whether anything matched and, for the error message,
/// the first candidate offered. Afterwards the caller picks the failure
/// mode: [`warn_if_not_done`] for enums with a safe default,
/// [`error_if_not_done`] for ones without.
///
/// ```
/// use mse_text::{EnumReader, Reader, ReaderOptions};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Default)]
/// enum Alignment {
///     #[default]
///     Left,
///     Center,
///     Right,
/// }
///
/// let text = "mse version: 0.1.0\nalignment: center\n";
/// let mut reader = Reader::from_str(text, "style", &ReaderOptions::new())?;
/// let mut alignment = Alignment::default();
/// if reader.enter_block("alignment")? {
///     let raw = reader.read_value()?;
///     let mut decoder = EnumReader::new(&raw);
///     decoder.handle("left", Alignment::Left, &mut alignment);
///     decoder.handle("center", Alignment::Center, &mut alignment);
///     decoder.handle("right", Alignment::Right, &mut alignment);
///     decoder.warn_if_not_done(&mut reader);
///     reader.exit_block()?;
/// }
/// assert_eq!(alignment, Alignment::Center);
/// # Ok::<(), mse_text::Error>(())
/// ```
///
/// [`handle`]: EnumReader::handle
/// [`warn_if_not_done`]: EnumReader::warn_if_not_done
/// [`error_if_not_done`]: EnumReader::error_if_not_done
pub struct EnumReader<'a> {
    value: &'a str,
    first: Option<&'static str>,
    done: bool,
}

impl<'a> EnumReader<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            first: None,
            done: false,
        }
    }

    /// Offer one candidate literal; assigns `constant` to `out` when it
    /// is the first to match the value. Returns whether it matched.
    pub fn handle<T>(&mut self, name: &'static str, constant: T, out: &mut T) -> bool {
        if self.first.is_none() {
            self.first = Some(name);
        }
        if !self.done && self.value == name {
            *out = constant;
            self.done = true;
            true
        } else {
            false
        }
    }

    /// Whether any candidate matched.
    pub fn is_done(&self) -> bool {
        self.done
    }

    fn first_candidate(&self) -> &'static str {
        match self.first {
            Some(first) => first,
            None => panic!("EnumReader finished without any candidate values"),
        }
    }

    /// Queue a warning when nothing matched; the out value keeps its
    /// default.
    pub fn warn_if_not_done<R: Read>(self, reader: &mut Reader<R>) {
        if !self.done {
            let message = format!(
                "Unrecognized value '{}', expected a value like '{}'",
                self.value,
                self.first_candidate()
            );
            reader.warning(message);
        }
    }

    /// Reject the file when nothing matched — for enums with no safe
    /// default.
    pub fn error_if_not_done<R: Read>(self, reader: &Reader<R>) -> Result<()> {
        if self.done {
            Ok(())
        } else {
            Err(Error::UnrecognizedValue {
                value: self.value.to_owned(),
                expected: self.first_candidate(),
                line: reader.previous_line_number,
            })
        }
    }
}
