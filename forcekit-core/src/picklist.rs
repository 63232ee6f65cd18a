use crate::{AsValue, Result, Value};
use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter, Write},
    str::FromStr,
};

/// The value of a multi-select picklist field: distinct entries joined by `;`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Picklist {
    values: Vec<String>,
}

impl Picklist {
    pub const SEPARATOR: char = ';';

    /// Later repetitions of an entry are dropped.
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut result = Self::default();
        for value in values {
            result.add(value);
        }
        result
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn find(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    /// Add `value` unless already present.
    pub fn add(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if self.find(&value).is_none() {
            self.values.push(value);
        }
        self
    }

    /// Remove `value` if present.
    pub fn remove(&mut self, value: &str) -> &mut Self {
        if let Some(index) = self.find(value) {
            self.values.remove(index);
        }
        self
    }
}

impl Display for Picklist {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_char(Self::SEPARATOR)?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl FromStr for Picklist {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s.split(Self::SEPARATOR)))
    }
}

impl AsValue for Picklist {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::display(self)
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let value = String::try_from_value(value)?;
        Ok(Self::new(value.split(Self::SEPARATOR)))
    }
}
