//! Text rendering for each value type the writer accepts, the inverse of
//! the reader's typed decoders.

use chrono::NaiveDateTime;

use crate::constants::DATE_TIME_FORMAT;
use crate::types::{FileName, Tribool, Vector2, Version};

mod sealed {
    pub trait Sealed {}
}

/// A value type the writer can render. Closed set, mirroring the
/// reader's `ReadableValue`: whatever one half understands, the other
/// half produces.
pub trait WritableValue: sealed::Sealed {
    fn write_text(&self, out: &mut String);
}

impl sealed::Sealed for String {}
impl WritableValue for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl sealed::Sealed for i32 {}
impl WritableValue for i32 {
    fn write_text(&self, out: &mut String) {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl sealed::Sealed for u32 {}
impl WritableValue for u32 {
    fn write_text(&self, out: &mut String) {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl sealed::Sealed for f64 {}
impl WritableValue for f64 {
    fn write_text(&self, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        out.push_str(buffer.format(*self));
    }
}

impl sealed::Sealed for bool {}
impl WritableValue for bool {
    fn write_text(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl sealed::Sealed for Tribool {}
impl WritableValue for Tribool {
    /// An indeterminate tribool renders as an empty value; callers
    /// normally leave such fields out entirely.
    fn write_text(&self, out: &mut String) {
        match self {
            Tribool::True => out.push_str("true"),
            Tribool::False => out.push_str("false"),
            Tribool::Indeterminate => {}
        }
    }
}

impl sealed::Sealed for NaiveDateTime {}
impl WritableValue for NaiveDateTime {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.format(DATE_TIME_FORMAT).to_string());
    }
}

impl sealed::Sealed for Vector2 {}
impl WritableValue for Vector2 {
    fn write_text(&self, out: &mut String) {
        let mut buffer = ryu::Buffer::new();
        out.push('(');
        out.push_str(buffer.format(self.x));
        out.push(',');
        out.push_str(buffer.format(self.y));
        out.push(')');
    }
}

impl sealed::Sealed for FileName {}
impl WritableValue for FileName {
    fn write_text(&self, out: &mut String) {
        out.push_str(self.to_write_string());
    }
}

impl sealed::Sealed for Version {}
impl WritableValue for Version {
    fn write_text(&self, out: &mut String) {
        use std::fmt::Write;

        let _ = write!(out, "{self}");
    }
}
