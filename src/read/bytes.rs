use std::io::{self, Read};

use smallvec::SmallVec;

use crate::constants::UTF8_BOM;

const CHUNK_BYTES: usize = 8 * 1024;

/// Buffered byte source with pushback, as the line decoder needs for
/// terminator handling and the encoding-marker peek.
pub(crate) struct ByteSource<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    pushback: SmallVec<[u8; 4]>,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0; CHUNK_BYTES],
            pos: 0,
            len: 0,
            pushback: SmallVec::new(),
        }
    }

    /// Next byte of the stream, or `None` at end of input.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.pop() {
            return Ok(Some(byte));
        }
        if self.pos == self.len {
            self.len = loop {
                match self.inner.read(&mut self.buf) {
                    Ok(len) => break len,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                }
            };
            self.pos = 0;
            if self.len == 0 {
                return Ok(None);
            }
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }

    /// Push one byte back; it is returned again by the next `next_byte`.
    pub fn unget(&mut self, byte: u8) {
        self.pushback.push(byte);
    }

    /// Consume a UTF-8 byte order mark at the current position. When the
    /// next bytes are not a marker they are pushed back unconsumed.
    pub fn eat_utf8_bom(&mut self) -> io::Result<bool> {
        for (matched, &expected) in UTF8_BOM.iter().enumerate() {
            match self.next_byte()? {
                Some(byte) if byte == expected => continue,
                Some(byte) => {
                    self.unget(byte);
                    for &seen in UTF8_BOM[..matched].iter().rev() {
                        self.unget(seen);
                    }
                    return Ok(false);
                }
                None => {
                    for &seen in UTF8_BOM[..matched].iter().rev() {
                        self.unget(seen);
                    }
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}
