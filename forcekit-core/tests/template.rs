#[cfg(test)]
mod tests {
    use forcekit_core::{
        Args, Fragment, MissingParameter, ParamKey, SafeString, Template, args,
    };
    use indoc::indoc;
    use time::macros::datetime;

    fn build(raw: &str, globals: Args, args: Option<&Args>) -> String {
        Template::with_args(raw, globals)
            .build(args)
            .expect("The query should build")
    }

    #[test]
    fn no_params() {
        assert_eq!(build("TEST SOQL", Args::new(), None), "TEST SOQL");
    }

    #[test]
    fn global_params() {
        assert_eq!(
            build(
                "TEST SOQL :one :two",
                args! { "one" => "test param one", "two" => "test param two" },
                None
            ),
            "TEST SOQL 'test param one' 'test param two'"
        );
    }

    #[test]
    fn local_params() {
        assert_eq!(
            build(
                "TEST SOQL :one :two",
                Args::new(),
                Some(&args! { "one" => "test param one", "two" => "test param two" })
            ),
            "TEST SOQL 'test param one' 'test param two'"
        );
    }

    #[test]
    fn mixed_params() {
        assert_eq!(
            build(
                "TEST SOQL :one :two",
                args! { "one" => "global param one", "two" => "global param two" },
                Some(&args! { "two" => "local param two" })
            ),
            "TEST SOQL 'global param one' 'local param two'"
        );
        assert_eq!(
            build(":one :two", args! { "one" => "G" }, Some(&args! { "two" => "L" })),
            "'G' 'L'"
        );
    }

    #[test]
    fn unquoted_param() {
        assert_eq!(
            build("TEST SOQL ::one", args! { "one" => "param one" }, None),
            "TEST SOQL param one"
        );
        assert_eq!(
            build("TEST SOQL :one", args! { "one" => "param one" }, None),
            "TEST SOQL 'param one'"
        );
    }

    #[test]
    fn safe_string_param() {
        assert_eq!(
            build(
                "TEST SOQL :one",
                args! { "one" => SafeString::new("\"special\tchars\"") },
                None
            ),
            "TEST SOQL \"special\tchars\""
        );
    }

    #[test]
    fn anonymous_params() {
        assert_eq!(
            build("TEST SOQL ? ?", args!["param one", "param two"], None),
            "TEST SOQL 'param one' 'param two'"
        );
        let template = Template::new("? ? ?");
        let keys: Vec<_> = template
            .fragments()
            .iter()
            .filter_map(|v| match v {
                Fragment::Placeholder { key, .. } => Some(key.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            keys,
            [ParamKey::Index(0), ParamKey::Index(1), ParamKey::Index(2)]
        );
        assert_eq!(
            template.build(Some(&args!["A", "B", "C"])).unwrap(),
            "'A' 'B' 'C'"
        );
    }

    #[test]
    fn typed_params() {
        let template = Template::new(indoc! {"
            SELECT Id FROM Opportunity
            WHERE Amount > ? AND IsClosed = :closed AND CloseDate < :date AND Owner = :owner
        "});
        assert_eq!(
            template
                .build(Some(
                    &args![1500.5]
                        .bind_name("closed", false)
                        .bind_name("date", datetime!(2024-06-30 00:00:00 UTC))
                        .bind_name("owner", None::<String>)
                ))
                .unwrap(),
            indoc! {"
                SELECT Id FROM Opportunity
                WHERE Amount > 1500.5 AND IsClosed = FALSE AND CloseDate < 2024-06-30T00:00:00+00:00 AND Owner = null
            "}
        );
    }

    #[test]
    fn missing_params() {
        let error = Template::new("TEST :param")
            .build(Some(&Args::new()))
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<MissingParameter>().map(|v| &v.key),
            Some(&ParamKey::Name("param".into()))
        );
        assert_eq!(error.to_string(), "Undefined query parameter \"param\"");
        assert!(Template::new("SELECT :x").build(None).is_err());
    }

    #[test]
    fn prepare_once_build_many() {
        let template = Template::with_args(
            "SELECT Id FROM ::object WHERE Name LIKE :name LIMIT :limit",
            args! { "object" => "Account", "limit" => 10 },
        );
        let first = template
            .build(Some(&args! { "name" => "Acme%" }))
            .unwrap();
        let second = template
            .build(Some(&args! { "name" => "Globex%", "limit" => 1 }))
            .unwrap();
        assert_eq!(
            first,
            "SELECT Id FROM Account WHERE Name LIKE 'Acme%' LIMIT 10"
        );
        assert_eq!(
            second,
            "SELECT Id FROM Account WHERE Name LIKE 'Globex%' LIMIT 1"
        );
        assert_eq!(
            template.build(Some(&args! { "name" => "Acme%" })).unwrap(),
            first
        );
    }

    #[test]
    fn concurrent_builds() {
        let template = Template::new("SELECT Id FROM Account WHERE Name = ?");
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let template = &template;
                    scope.spawn(move || template.build(Some(&args![format!("n{i}")])))
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(
                    handle.join().unwrap().unwrap(),
                    format!("SELECT Id FROM Account WHERE Name = 'n{i}'")
                );
            }
        });
    }
}
