//! Typed decoders from raw document text.
//!
//! Scalar fields (numbers, booleans, versions) have sane defaults and are
//! likely to be hand-edited, so a malformed one only queues a warning and
//! leaves the destination unchanged. Structured values (dates, vectors)
//! have no safe default; corruption there rejects the file.

use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT, FALSE_WORDS, TRUE_WORDS};
use crate::error::{Error, Result};
use crate::types::{FileName, Tribool, Vector2, Version};

use super::Reader;

mod sealed {
    pub trait Sealed {}
}

/// A value type the reader can decode. The set is closed; adding a type
/// means deciding its failure mode (warning with unchanged value, or a
/// hard error) here.
pub trait ReadableValue: sealed::Sealed {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()>;
}

impl sealed::Sealed for String {}
impl ReadableValue for String {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        *out = reader.read_value()?;
        Ok(())
    }
}

impl sealed::Sealed for i32 {}
impl ReadableValue for i32 {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match raw.trim().parse::<i32>() {
            Ok(parsed) => *out = parsed,
            Err(_) => reader.warning(format!("Expected integer instead of '{raw}'")),
        }
        Ok(())
    }
}

impl sealed::Sealed for u32 {}
impl ReadableValue for u32 {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match raw.trim().parse::<i64>() {
            Err(_) => {
                reader.warning(format!("Expected non-negative integer instead of '{raw}'"));
            }
            Ok(parsed) if parsed < 0 => {
                reader.warning(format!("Expected non-negative integer instead of {parsed}"));
                // absolute value: -1 coming out as a huge number would be stranger
                *out = parsed.unsigned_abs() as u32;
            }
            Ok(parsed) => *out = parsed as u32,
        }
        Ok(())
    }
}

impl sealed::Sealed for f64 {}
impl ReadableValue for f64 {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match raw.trim().parse::<f64>() {
            Ok(parsed) => *out = parsed,
            Err(_) => {
                reader.warning(format!("Expected floating point number instead of '{raw}'"));
            }
        }
        Ok(())
    }
}

fn decode_bool(raw: &str) -> Option<bool> {
    if TRUE_WORDS.contains(&raw) {
        Some(true)
    } else if FALSE_WORDS.contains(&raw) {
        Some(false)
    } else {
        None
    }
}

impl sealed::Sealed for bool {}
impl ReadableValue for bool {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match decode_bool(&raw) {
            Some(parsed) => *out = parsed,
            None => {
                reader.warning(format!(
                    "Expected boolean ('true' or 'false') instead of '{raw}'"
                ));
            }
        }
        Ok(())
    }
}

impl sealed::Sealed for Tribool {}
impl ReadableValue for Tribool {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match decode_bool(&raw) {
            Some(parsed) => *out = parsed.into(),
            None => {
                reader.warning(format!(
                    "Expected boolean ('true' or 'false') instead of '{raw}'"
                ));
            }
        }
        Ok(())
    }
}

impl sealed::Sealed for NaiveDateTime {}
impl ReadableValue for NaiveDateTime {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        let trimmed = raw.trim();
        let parsed = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT).or_else(|_| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map(|date| date.and_time(NaiveTime::MIN))
        });
        match parsed {
            Ok(date_time) => {
                *out = date_time;
                Ok(())
            }
            Err(_) => Err(Error::ExpectedDateTime {
                value: raw,
                line: reader.previous_line_number,
            }),
        }
    }
}

impl sealed::Sealed for Vector2 {}
impl ReadableValue for Vector2 {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match raw.parse::<Vector2>() {
            Ok(vector) => {
                *out = vector;
                Ok(())
            }
            Err(_) => Err(Error::ExpectedVector {
                value: raw,
                line: reader.previous_line_number,
            }),
        }
    }
}

impl sealed::Sealed for FileName {}
impl ReadableValue for FileName {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        *out = FileName::from_read_string(&reader.read_value()?);
        Ok(())
    }
}

impl sealed::Sealed for Version {}
impl ReadableValue for Version {
    fn read_from<R: Read>(reader: &mut Reader<R>, out: &mut Self) -> Result<()> {
        let raw = reader.read_value()?;
        match raw.trim().parse::<Version>() {
            Ok(parsed) => *out = parsed,
            Err(_) => reader.warning(format!("Expected version number instead of '{raw}'")),
        }
        Ok(())
    }
}
