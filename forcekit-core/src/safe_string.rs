use crate::{DefaultSoqlWriter, SoqlWriter, Value};
use std::fmt::{self, Display, Formatter};

/// Query text that is already safe to splice verbatim.
///
/// Values of this type are never escaped again: binding a `SafeString` to a
/// placeholder copies it as it is, whatever the quoting mode of the placeholder.
/// Build one with [`SafeString::escape`], or with [`SafeString::new`] when the
/// caller has rendered the text itself (a subquery, a date literal, ...).
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeString(String);

impl SafeString {
    /// Wrap text the caller asserts is safe, no escaping is applied.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Escape `value` with the default SOQL dialect.
    ///
    /// * `like`: also escape the `_` and `%` wildcards.
    /// * `quote`: wrap strings in the literal delimiters. Other values are never quoted.
    ///
    /// An already safe value is returned unchanged.
    pub fn escape(value: impl Into<Value>, like: bool, quote: bool) -> SafeString {
        Self::escape_with(&DefaultSoqlWriter::new(), value.into(), like, quote)
    }

    /// Escape `value` with a specific dialect.
    pub fn escape_with(
        writer: &dyn SoqlWriter,
        value: Value,
        like: bool,
        quote: bool,
    ) -> SafeString {
        if let Value::Safe(safe) = value {
            return safe;
        }
        let mut out = String::new();
        writer.write_value(&mut out, &value, like, quote);
        SafeString(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for SafeString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeString> for String {
    fn from(value: SafeString) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_value() {
        let safe = SafeString::new("Test Value");
        assert_eq!(safe.to_string(), "Test Value");
        assert_eq!(safe.as_str(), "Test Value");
        assert_eq!(String::from(safe), "Test Value");
    }

    #[test]
    fn like_escaping() {
        let escaped = SafeString::escape("t'e\nst%_ string", true, true);
        assert_eq!(escaped.as_str(), r"'t\'e\nst\%\_ string'");
    }

    #[test]
    fn escape_is_idempotent() {
        for (like, quote) in [(false, false), (false, true), (true, false), (true, true)] {
            let once = SafeString::escape("it's 100%", like, quote);
            let twice = SafeString::escape(once.clone(), like, quote);
            assert_eq!(once, twice);
            let thrice = SafeString::escape(twice, !like, !quote);
            assert_eq!(once, thrice);
        }
    }

    #[test]
    fn safe_input_untouched() {
        let raw = SafeString::new("\"special\tchars\"");
        assert_eq!(SafeString::escape(raw.clone(), true, true), raw);
    }
}
