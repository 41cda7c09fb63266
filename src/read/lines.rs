use std::io::{self, Read};

use smallvec::SmallVec;

use crate::constants::LINE_BUF_BYTES;

use super::bytes::ByteSource;

/// Failure in the line decoding layer. The reader annotates these with
/// the line number they occurred on before surfacing them.
#[derive(Debug)]
pub enum LineError {
    Io(io::Error),
    InvalidUtf8,
}

impl From<io::Error> for LineError {
    fn from(err: io::Error) -> Self {
        LineError::Io(err)
    }
}

/// Streaming line decoder: produces UTF-8 text lines out of a byte
/// stream, one at a time, forward-only. A leading byte order mark is
/// stripped; `\n`, `\r\n` and lone `\r` all terminate a line.
pub struct LineReader<R> {
    source: ByteSource<R>,
    eof: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Result<Self, LineError> {
        let mut source = ByteSource::new(input);
        source.eat_utf8_bom()?;
        Ok(Self { source, eof: false })
    }

    /// True once a read has consumed the end of the stream.
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Read one line, without its terminator. At end of input an empty
    /// string comes back and `eof()` turns true; a final line with no
    /// terminator also sets `eof()` while still returning its text.
    pub fn read_line(&mut self) -> Result<String, LineError> {
        let mut buf: SmallVec<[u8; LINE_BUF_BYTES]> = SmallVec::new();
        loop {
            match self.source.next_byte()? {
                None => {
                    self.eof = true;
                    break;
                }
                Some(b'\n') => break,
                Some(b'\r') => {
                    match self.source.next_byte()? {
                        None => self.eof = true,
                        Some(b'\n') => {}
                        Some(other) => self.source.unget(other), // \r not followed by \n
                    }
                    break;
                }
                Some(byte) => buf.push(byte),
            }
        }
        decode_utf8(&buf)
    }

    /// Variant that reads every remaining byte as one text value, with no
    /// terminator splitting. Used to scan a version preamble out of a
    /// stream that is not going to be parsed further.
    pub fn read_to_end(&mut self) -> Result<String, LineError> {
        let mut buf: SmallVec<[u8; LINE_BUF_BYTES]> = SmallVec::new();
        while let Some(byte) = self.source.next_byte()? {
            buf.push(byte);
        }
        self.eof = true;
        decode_utf8(&buf)
    }
}

fn decode_utf8(buf: &[u8]) -> Result<String, LineError> {
    match std::str::from_utf8(buf) {
        Ok(text) => Ok(text.to_owned()),
        Err(_) => Err(LineError::InvalidUtf8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(input: &[u8]) -> Vec<String> {
        let mut reader = LineReader::new(input).unwrap();
        let mut out = Vec::new();
        while !reader.eof() {
            out.push(reader.read_line().unwrap());
        }
        out
    }

    #[rstest::rstest]
    fn test_terminators_normalize() {
        assert_eq!(lines_of(b"a\nb\r\nc\rd\n"), ["a", "b", "c", "d", ""]);
    }

    #[rstest::rstest]
    fn test_final_line_without_terminator() {
        let mut reader = LineReader::new(&b"a\nb"[..]).unwrap();
        assert_eq!(reader.read_line().unwrap(), "a");
        assert!(!reader.eof());
        assert_eq!(reader.read_line().unwrap(), "b");
        assert!(reader.eof());
    }

    #[rstest::rstest]
    fn test_terminated_final_line_sets_eof_on_next_read() {
        let mut reader = LineReader::new(&b"a\n"[..]).unwrap();
        assert_eq!(reader.read_line().unwrap(), "a");
        assert!(!reader.eof());
        assert_eq!(reader.read_line().unwrap(), "");
        assert!(reader.eof());
    }

    #[rstest::rstest]
    fn test_lone_carriage_return_at_eof() {
        let mut reader = LineReader::new(&b"a\r"[..]).unwrap();
        assert_eq!(reader.read_line().unwrap(), "a");
        assert!(reader.eof());
    }

    #[rstest::rstest]
    fn test_bom_stripped() {
        assert_eq!(lines_of(b"\xEF\xBB\xBFkey: value\n"), ["key: value", ""]);
    }

    #[rstest::rstest]
    fn test_non_utf8_rejected() {
        let mut reader = LineReader::new(&b"\xFF\xFE\n"[..]).unwrap();
        assert!(matches!(
            reader.read_line(),
            Err(LineError::InvalidUtf8)
        ));
    }

    #[rstest::rstest]
    fn test_multibyte_text_survives() {
        assert_eq!(lines_of("naam: café\n".as_bytes()), ["naam: café", ""]);
    }

    #[rstest::rstest]
    fn test_read_to_end_keeps_terminators() {
        let mut reader = LineReader::new(&b"a\nb\r\nc"[..]).unwrap();
        assert_eq!(reader.read_to_end().unwrap(), "a\nb\r\nc");
        assert!(reader.eof());
    }

    #[rstest::rstest]
    fn test_long_line_spills_to_heap() {
        let long = "x".repeat(LINE_BUF_BYTES * 3);
        let input = format!("{long}\nnext\n");
        assert_eq!(lines_of(input.as_bytes()), [long.as_str(), "next", ""]);
    }
}
