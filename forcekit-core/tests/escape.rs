#[cfg(test)]
mod tests {
    use forcekit_core::{
        DefaultSoqlWriter, SafeString, SoqlWriter, VALUE_FALSE, VALUE_NULL, VALUE_TRUE, Value,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use time::macros::{date, datetime};

    fn escaped(value: impl Into<Value>, like: bool, quote: bool) -> String {
        SafeString::escape(value, like, quote).into_string()
    }

    #[test]
    fn escape_null() {
        assert_eq!(escaped(Value::Null, false, true), VALUE_NULL);
        assert_eq!(escaped(None::<String>, false, true), "null");
        assert_eq!(escaped(None::<i32>, true, false), "null");
    }

    #[test]
    fn escape_bool() {
        assert_eq!(escaped(true, false, true), VALUE_TRUE);
        assert_eq!(escaped(false, false, true), VALUE_FALSE);
        assert_eq!(escaped(true, true, false), "TRUE");
    }

    #[test]
    fn escape_numbers() {
        assert_eq!(escaped(12345, false, true), "12345");
        assert_eq!(escaped(-7i8, false, true), "-7");
        assert_eq!(escaped(u64::MAX, false, true), "18446744073709551615");
        assert_eq!(escaped(12345.6789, false, true), "12345.6789");
        assert_eq!(escaped(0.1f32, false, true), "0.1");
        assert_eq!(escaped(-2.75f32, true, false), "-2.75");
        assert_eq!(
            escaped(Decimal::from_str("12.500").unwrap(), false, true),
            "12.500"
        );
    }

    #[test]
    fn escape_dates() {
        assert_eq!(
            escaped(datetime!(2000-01-01 12:00:00 UTC), false, true),
            "2000-01-01T12:00:00+00:00"
        );
        assert_eq!(
            escaped(datetime!(2000-01-01 12:00:00 +2), false, false),
            "2000-01-01T12:00:00+02:00"
        );
        assert_eq!(escaped(date!(2020-02-29), false, true), "2020-02-29");
    }

    #[test]
    fn escape_strings() {
        assert_eq!(escaped("test string", false, true), "'test string'");
        assert_eq!(escaped("test string", false, false), "test string");
        assert_eq!(escaped(String::from("O'Neil"), false, true), r"'O\'Neil'");
        assert_eq!(escaped('"', false, true), r#"'\"'"#);
        assert_eq!(
            escaped("\n\r\t\u{7}\u{c}", false, false),
            r"\n\r\t\b\f"
        );
    }

    #[test]
    fn escape_like() {
        assert_eq!(
            escaped("t'e\nst%_ string", true, true),
            r"'t\'e\nst\%\_ string'"
        );
        assert_eq!(escaped("%_", false, true), "'%_'");
        assert_eq!(escaped("%_", true, false), r"\%\_");
    }

    #[test]
    fn escape_single_pass() {
        // Escape sequences introduced for one char are never escaped again
        assert_eq!(escaped("'", true, false), r"\'");
        assert_eq!(escaped(r"\'", true, false), r"\\\'");
        assert_eq!(escaped("_'_", true, false), r"\_\'\_");
    }

    #[test]
    fn escape_backslash() {
        assert_eq!(escaped(r"a\b", false, true), r"'a\\b'");
        assert_eq!(
            escaped(r"\' OR Name != '", false, true),
            r"'\\\' OR Name != \''"
        );
    }

    #[test]
    fn escape_idempotent() {
        let values: [Value; 6] = [
            Value::Null,
            true.into(),
            42.into(),
            "it's 50% off".into(),
            datetime!(2000-01-01 12:00:00 UTC).into(),
            "a\tb".into(),
        ];
        for value in values {
            for (like, quote) in [(false, false), (true, true), (false, true)] {
                let once = SafeString::escape(value.clone(), like, quote);
                assert_eq!(SafeString::escape(once.clone(), like, quote), once);
                assert_eq!(SafeString::escape(once.clone(), !like, !quote), once);
            }
        }
    }

    #[test]
    fn stringify_unknowns() {
        struct Money(u32);
        impl std::fmt::Display for Money {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}'s worth", self.0)
            }
        }
        assert_eq!(
            escaped(Value::display(Money(5)), false, true),
            r"'5\'s worth'"
        );
    }

    #[test]
    fn custom_delimiters() {
        struct Brackets;
        impl SoqlWriter for Brackets {
            fn as_dyn(&self) -> &dyn SoqlWriter {
                self
            }
            fn quote_open(&self) -> char {
                '['
            }
            fn quote_close(&self) -> char {
                ']'
            }
        }
        assert_eq!(
            SafeString::escape_with(&Brackets, "x".into(), false, true).as_str(),
            "[x]"
        );
        assert_eq!(
            SafeString::escape_with(DefaultSoqlWriter::new().as_dyn(), "x".into(), false, true)
                .as_str(),
            "'x'"
        );
    }
}
