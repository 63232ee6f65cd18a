#[cfg(test)]
mod tests {
    use forcekit_core::{AsValue, Picklist, SafeString, Value};
    use rust_decimal::Decimal;
    use std::{borrow::Cow, str::FromStr};
    use time::{
        Date, OffsetDateTime, PrimitiveDateTime,
        macros::{date, datetime},
    };

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float64(Some(1.0)), Value::Null);
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Safe(SafeString::new("")).is_null());
        assert!(Value::Int64(None).same_type(&Value::Int64(Some(1))));
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert!(bool::try_from_value(val).unwrap());
        assert!(!bool::try_from_value(Value::Int64(Some(0))).unwrap());
        assert!(bool::try_from_value("TRUE".into()).unwrap());
        assert!(!bool::try_from_value("false".into()).unwrap());
        assert!(bool::try_from_value("yes".into()).is_err());
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(127i8), Value::Int64(Some(127)));
        assert_eq!(Value::from(300u16), Value::UInt64(Some(300)));
        assert_eq!(i8::try_from_value(Value::Int64(Some(-128))).unwrap(), -128);
        assert!(i8::try_from_value(Value::Int64(Some(128))).is_err());
        assert!(u32::try_from_value(Value::Int64(Some(-1))).is_err());
        assert_eq!(u64::try_from_value(Value::Int64(Some(5))).unwrap(), 5);
        assert_eq!(i32::try_from_value(" 42 ".into()).unwrap(), 42);
        assert!(i32::try_from_value("42abc".into()).is_err());
        assert!(i32::try_from_value(Value::Float64(Some(1.5))).is_err());
    }

    #[test]
    fn value_floats() {
        assert_eq!(Value::from(1.5f32), Value::Float32(Some(1.5)));
        assert_eq!(f32::as_empty_value(), Value::Float32(None));
        assert_eq!(f32::try_from_value(Value::Float32(Some(0.1))).unwrap(), 0.1);
        assert_eq!(f64::try_from_value(Value::Float32(Some(0.5))).unwrap(), 0.5);
        assert_eq!(f64::try_from_value(Value::Int64(Some(3))).unwrap(), 3.0);
        assert_eq!(f64::try_from_value("2.25".into()).unwrap(), 2.25);
        assert_eq!(
            f64::try_from_value(Decimal::from_str("0.5").unwrap().into()).unwrap(),
            0.5
        );
    }

    #[test]
    fn value_decimal() {
        let decimal = Decimal::from_str("1234.5678").unwrap();
        assert_eq!(Value::from(decimal), Value::Decimal(Some(decimal)));
        assert_eq!(Decimal::try_from_value("1234.5678".into()).unwrap(), decimal);
        assert_eq!(
            Decimal::try_from_value(Value::Int64(Some(7))).unwrap(),
            Decimal::from(7)
        );
    }

    #[test]
    fn value_strings() {
        assert_eq!(Value::from("a"), Value::Varchar(Some("a".into())));
        assert_eq!(Value::from('c'), Value::Varchar(Some("c".into())));
        assert_eq!(
            Value::from(Cow::Borrowed("cow")),
            Value::Varchar(Some("cow".into()))
        );
        assert_eq!(String::try_from_value("a".into()).unwrap(), "a");
        assert_eq!(char::try_from_value("c".into()).unwrap(), 'c');
        assert!(char::try_from_value("cc".into()).is_err());
        assert!(<&str>::try_from_value("a".into()).is_err());
        assert!(String::try_from_value(Value::Int64(Some(1))).is_err());
    }

    #[test]
    fn value_dates() {
        assert_eq!(
            Date::try_from_value("2020-02-29".into()).unwrap(),
            date!(2020-02-29)
        );
        assert_eq!(
            OffsetDateTime::try_from_value("2000-01-01T12:00:00.000Z".into()).unwrap(),
            datetime!(2000-01-01 12:00:00 UTC)
        );
        assert_eq!(
            PrimitiveDateTime::try_from_value("2000-01-01T12:00:00+02:00".into()).unwrap(),
            datetime!(2000-01-01 10:00:00)
        );
        assert_eq!(
            OffsetDateTime::try_from_value(datetime!(2000-01-01 12:00:00).into()).unwrap(),
            datetime!(2000-01-01 12:00:00 UTC)
        );
        assert_eq!(
            Date::try_from_value(datetime!(2000-01-01 12:00:00 UTC).into()).unwrap(),
            date!(2000-01-01)
        );
    }

    #[test]
    fn value_option() {
        assert_eq!(Value::from(None::<i32>), Value::Int64(None));
        assert_eq!(Value::from(Some(3)), Value::Int64(Some(3)));
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int64(Some(3))).unwrap(),
            Some(3)
        );
    }

    #[test]
    fn value_safe_and_picklist() {
        let safe = SafeString::new("x");
        assert_eq!(Value::from(safe.clone()), Value::Safe(safe.clone()));
        assert_eq!(SafeString::try_from_value(Value::Safe(safe.clone())).unwrap(), safe);
        assert!(SafeString::try_from_value("x".into()).is_err());
        let picklist = Picklist::new(["A", "B"]);
        assert_eq!(Value::from(picklist), Value::Varchar(Some("A;B".into())));
    }
}
