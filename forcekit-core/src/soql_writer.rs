use crate::Value;
use std::fmt::Write;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Opening delimiter of a string literal.
pub const QUOTE_OPEN: char = '\'';
/// Closing delimiter of a string literal.
pub const QUOTE_CLOSE: char = '\'';
pub const VALUE_NULL: &str = "null";
pub const VALUE_TRUE: &str = "TRUE";
pub const VALUE_FALSE: &str = "FALSE";

/// Dialect printer rendering values as query literals.
///
/// Every method has a default implementation producing SOQL; a dialect only
/// overrides what differs (for example asymmetric string delimiters).
pub trait SoqlWriter {
    fn as_dyn(&self) -> &dyn SoqlWriter;

    fn quote_open(&self) -> char {
        QUOTE_OPEN
    }

    fn quote_close(&self) -> char {
        QUOTE_CLOSE
    }

    /// Escape sequence for `c`, or `None` when the char is copied verbatim.
    ///
    /// The LIKE wildcards are only escaped when `like` is set.
    fn escape_sequence(&self, c: char, like: bool) -> Option<&'static str> {
        match c {
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            '\u{7}' => Some("\\b"),
            '\u{c}' => Some("\\f"),
            '"' => Some("\\\""),
            '\'' => Some("\\'"),
            '\\' => Some("\\\\"),
            '_' if like => Some("\\_"),
            '%' if like => Some("\\%"),
            _ => None,
        }
    }

    /// Render a value as a literal. Only strings honour `like` and `quote`.
    fn write_value(&self, out: &mut String, value: &Value, like: bool, quote: bool) {
        match value {
            Value::Null
            | Value::Boolean(None)
            | Value::Int64(None)
            | Value::UInt64(None)
            | Value::Float32(None)
            | Value::Float64(None)
            | Value::Decimal(None)
            | Value::Varchar(None)
            | Value::Date(None)
            | Value::Timestamp(None)
            | Value::TimestampWithTimezone(None) => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => self.write_value_float32(out, *v),
            Value::Float64(Some(v)) => self.write_value_float64(out, *v),
            Value::Decimal(Some(v)) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(Some(v)) => self.write_value_string(out, v, like, quote),
            Value::Date(Some(v)) => self.write_value_date(out, v),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(out, v),
            Value::TimestampWithTimezone(Some(v)) => self.write_value_timestamptz(out, v),
            Value::Safe(v) => out.push_str(v.as_str()),
        }
    }

    fn write_value_none(&self, out: &mut String) {
        out.push_str(VALUE_NULL);
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str([VALUE_FALSE, VALUE_TRUE][value as usize]);
    }

    /// Shortest decimal text that reads back as the same `f32`, never in exponent form.
    fn write_value_float32(&self, out: &mut String, value: f32) {
        if value.is_finite() {
            let _ = write!(out, "{}", value);
        } else {
            log::warn!("Float {} has no query literal, writing null instead", value);
            self.write_value_none(out);
        }
    }

    /// Shortest decimal text that reads back as the same `f64`, never in exponent form.
    fn write_value_float64(&self, out: &mut String, value: f64) {
        if value.is_finite() {
            let _ = write!(out, "{}", value);
        } else {
            log::warn!("Float {} has no query literal, writing null instead", value);
            self.write_value_none(out);
        }
    }

    /// Copy `value` escaping every char that has an escape sequence, in a single pass.
    fn write_escaped(&self, out: &mut String, value: &str, like: bool) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if let Some(replace) = self.escape_sequence(c, like) {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    fn write_value_string(&self, out: &mut String, value: &str, like: bool, quote: bool) {
        if quote {
            out.push(self.quote_open());
        }
        self.write_escaped(out, value, like);
        if quote {
            out.push(self.quote_close());
        }
    }

    /// Render a date as `YYYY-MM-DD`.
    fn write_value_date(&self, out: &mut String, value: &Date) {
        let _ = write!(
            out,
            "{:04}-{:02}-{:02}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    /// Render a time as `HH:MM:SS`, sub-seconds are dropped.
    fn write_value_time(&self, out: &mut String, value: &Time) {
        let _ = write!(
            out,
            "{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second()
        );
    }

    /// Timestamps without offset are taken to be UTC.
    fn write_value_timestamp(&self, out: &mut String, value: &PrimitiveDateTime) {
        self.write_value_timestamptz(out, &value.assume_utc());
    }

    /// Render a date time as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    fn write_value_timestamptz(&self, out: &mut String, value: &OffsetDateTime) {
        self.write_value_date(out, &value.date());
        out.push('T');
        self.write_value_time(out, &value.time());
        let offset = value.offset();
        let (hours, minutes, _) = offset.as_hms();
        let _ = write!(
            out,
            "{}{:02}:{:02}",
            if offset.is_negative() { '-' } else { '+' },
            hours.unsigned_abs(),
            minutes.unsigned_abs()
        );
    }
}

/// The SOQL dialect with every default in place.
#[derive(Default, Debug, Clone, Copy)]
pub struct DefaultSoqlWriter;

impl DefaultSoqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl SoqlWriter for DefaultSoqlWriter {
    fn as_dyn(&self) -> &dyn SoqlWriter {
        self
    }
}
