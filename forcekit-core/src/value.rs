use crate::SafeString;
use rust_decimal::Decimal;
use std::fmt::Display;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Dynamically typed argument value bound to a query placeholder or stored in a record field.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int64(Option<i64>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Date(Option<Date>),
    /// Date time without offset, rendered as UTC.
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    /// Text already safe to splice into a query, never escaped again.
    Safe(SafeString),
}

impl Value {
    /// Stringify any displayable value, it will be escaped as a string.
    pub fn display(value: impl Display) -> Self {
        Value::Varchar(Some(value.to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(
            self,
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
                | Value::TimestampWithTimezone(None)
        )
    }

    pub fn same_type(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
