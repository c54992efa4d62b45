mod cli {
    pub use profiles::cli::*;
}

mod context {
    pub use profiles::context::*;
}

mod error {
    pub use profiles::error::*;
}

mod output {
    pub use profiles::output::*;
}

mod set_under_test {
    #![allow(dead_code)]

    include!("../src/commands/set.rs");

    #[test]
    fn keeps_strings_verbatim() {
        let value = parse_value(ValueKind::String, " spaced ").expect("string should parse");
        assert_eq!(value, Value::from(" spaced "));
    }

    #[test]
    fn parses_scalars() {
        assert_eq!(parse_value(ValueKind::Int, "42").expect("int"), Value::from(42));
        assert_eq!(parse_value(ValueKind::Float, "0.5").expect("float"), Value::from(0.5));
        assert_eq!(parse_value(ValueKind::Bool, "true").expect("bool"), Value::Bool(true));
    }

    #[test]
    fn parses_json_documents() {
        let value = parse_value(ValueKind::Json, r#"{"width": 1280, "tags": ["a"]}"#)
            .expect("json should parse");
        assert_eq!(value, serde_json::json!({ "width": 1280, "tags": ["a"] }));
    }

    #[test]
    fn rejects_mismatched_values() {
        assert!(parse_value(ValueKind::Int, "4.2").is_err());
        assert!(parse_value(ValueKind::Float, "NaN").is_err());
        assert!(parse_value(ValueKind::Bool, "yes").is_err());
        assert!(parse_value(ValueKind::Json, "{").is_err());
    }
}
