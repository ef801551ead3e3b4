use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::MAX_SAFE_INT;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::values::ast_from_value;
use crate::values::coerce_input_value;
use crate::values::coerce_variable_values;
use crate::values::is_valid_literal_value;
use crate::values::value_from_ast;
use crate::Value;
use graphql_exec_parser::parse_value;
use graphql_exec_parser::print_value;
use graphql_exec_parser::ParseParams;
use indexmap::IndexMap;
use proptest::prelude::*;

fn schema() -> Schema {
    SchemaBuilder::new()
        .load_str(r#"
            enum Color { RED, GREEN }
            input Point { x: Int!, y: Int = 0, color: Color }
            type Query { f(p: Point): Int }
        "#)
        .unwrap()
        .build()
        .unwrap()
}

fn type_of(text: &str) -> TypeAnnotation {
    TypeAnnotation::from_ast(&graphql_exec_parser::parse_type(ParseParams::from(text)).unwrap())
}

fn literal(text: &str) -> graphql_exec_parser::ast::Value {
    parse_value(ParseParams::from(text)).unwrap()
}

// =============================================================================
// Built-in scalars
// =============================================================================

mod builtin_scalars {
    use super::*;

    /// Verifies that result coercion of the built-in scalars is lenient
    /// toward other scalar kinds.
    #[test]
    fn serialize_is_lenient() {
        let int = ScalarType::int();
        assert_eq!(int.serialize(&Value::Boolean(true)), Some(Value::Int(1)));
        assert_eq!(int.serialize(&Value::Float(3.9)), Some(Value::Int(3)));
        assert_eq!(int.serialize(&Value::from(" 42 ")), Some(Value::Int(42)));
        assert_eq!(int.serialize(&Value::from("forty")), None);
        assert_eq!(int.serialize(&Value::Float(f64::NAN)), None);

        let float = ScalarType::float();
        assert_eq!(float.serialize(&Value::Int(2)), Some(Value::Float(2.0)));
        assert_eq!(float.serialize(&Value::from("1.5")), Some(Value::Float(1.5)));

        let string = ScalarType::string();
        assert_eq!(string.serialize(&Value::Int(7)), Some(Value::from("7")));
        assert_eq!(string.serialize(&Value::Boolean(false)), Some(Value::from("false")));
        assert_eq!(string.serialize(&Value::List(vec![])), None);

        let boolean = ScalarType::boolean();
        assert_eq!(boolean.serialize(&Value::Int(0)), Some(Value::Boolean(false)));
        assert_eq!(boolean.serialize(&Value::from("false")), Some(Value::Boolean(false)));
        assert_eq!(boolean.serialize(&Value::from("yes")), Some(Value::Boolean(true)));

        assert_eq!(ScalarType::id().serialize(&Value::Int(12)), Some(Value::from("12")));
    }

    /// Verifies that literal coercion only accepts the literal kinds each
    /// scalar allows.
    #[test]
    fn parse_literal_is_strict() {
        let int = ScalarType::int();
        assert_eq!(int.parse_literal(&literal("12")), Some(Value::Int(12)));
        assert_eq!(int.parse_literal(&literal("1.5")), None);
        assert_eq!(int.parse_literal(&literal("\"12\"")), None);

        let float = ScalarType::float();
        assert_eq!(float.parse_literal(&literal("12")), Some(Value::Float(12.0)));

        let id = ScalarType::id();
        assert_eq!(id.parse_literal(&literal("12")), Some(Value::from("12")));
        assert_eq!(id.parse_literal(&literal("\"a\"")), Some(Value::from("a")));
        assert_eq!(id.parse_literal(&literal("true")), None);

        assert_eq!(ScalarType::boolean().parse_literal(&literal("1")), None);
        assert!(ScalarType::builtin("Date").is_none());
    }

    /// Verifies that integers outside the safe JSON range are rejected.
    #[test]
    fn int_rejects_unsafe_values() {
        let int = ScalarType::int();
        assert_eq!(int.serialize(&Value::Int(MAX_SAFE_INT)), Some(Value::Int(MAX_SAFE_INT)));
        assert_eq!(int.serialize(&Value::Int(MAX_SAFE_INT + 1)), None);
        assert_eq!(int.serialize(&Value::Int(-MAX_SAFE_INT - 1)), None);
    }

    proptest! {
        /// Verifies that every safe integer survives Int coercion from an
        /// integer, a float and a numeric string alike.
        #[test]
        fn int_coercion_preserves_safe_integers(n in -MAX_SAFE_INT..=MAX_SAFE_INT) {
            let int = ScalarType::int();
            prop_assert_eq!(int.serialize(&Value::Int(n)), Some(Value::Int(n)));
            prop_assert_eq!(int.parse_value(&Value::from(n.to_string())), Some(Value::Int(n)));
            if n.unsigned_abs() < (1 << 52) {
                prop_assert_eq!(int.serialize(&Value::Float(n as f64)), Some(Value::Int(n)));
            }
        }

        /// Verifies that String coercion of an integer matches its decimal
        /// form.
        #[test]
        fn string_coercion_of_ints(n in any::<i64>()) {
            prop_assert_eq!(
                ScalarType::string().serialize(&Value::Int(n)),
                Some(Value::String(n.to_string())),
            );
        }
    }
}

// =============================================================================
// Input coercion
// =============================================================================

mod input_coercion {
    use super::*;

    /// Verifies that input objects get defaults filled in and enum names
    /// accepted.
    #[test]
    fn coerces_input_objects() {
        let schema = schema();
        let input = Value::from(serde_json::json!({"x": 1, "color": "GREEN"}));
        let coerced = coerce_input_value(&schema, &type_of("Point"), &input).unwrap();
        assert_eq!(coerced.to_json_string(), r#"{"x":1,"y":0,"color":"GREEN"}"#);
    }

    /// Verifies that every problem with an input object is reported.
    #[test]
    fn reports_all_input_object_problems() {
        let schema = schema();
        let input = Value::from(serde_json::json!({"z": 1, "color": "BLUE"}));
        let problems = coerce_input_value(&schema, &type_of("Point"), &input).unwrap_err();
        assert_eq!(problems, vec![
            "Field \"z\" is not defined by type \"Point\".".to_string(),
            "Field \"Point.x\" of required type \"Int!\" was not provided.".to_string(),
            "In field \"color\": Expected type \"Color\", found \"BLUE\".".to_string(),
        ]);
    }

    /// Verifies that a single value is wrapped for a list type and that
    /// list item problems name the item.
    #[test]
    fn coerces_lists() {
        let schema = schema();
        let list_type = type_of("[Int]");
        assert_eq!(
            coerce_input_value(&schema, &list_type, &Value::Int(3)).unwrap(),
            Value::List(vec![Value::Int(3)]),
        );
        let problems = coerce_input_value(
            &schema,
            &list_type,
            &Value::from(serde_json::json!([1, "x"])),
        ).unwrap_err();
        assert_eq!(problems, vec!["In element #1: Expected type \"Int\", found \"x\".".to_string()]);
    }

    /// Verifies that null is only accepted for nullable types.
    #[test]
    fn null_needs_nullable_type() {
        let schema = schema();
        assert_eq!(coerce_input_value(&schema, &type_of("Int"), &Value::Null).unwrap(), Value::Null);
        assert_eq!(
            coerce_input_value(&schema, &type_of("Int!"), &Value::Null).unwrap_err(),
            vec!["Expected non-null value of type \"Int!\", found null.".to_string()],
        );
    }
}

// =============================================================================
// Literals
// =============================================================================

mod literals {
    use super::*;

    /// Verifies that literals coerce with variables substituted and
    /// absent object fields defaulted.
    #[test]
    fn value_from_ast_substitutes_variables() {
        let schema = schema();
        let variables = IndexMap::from([("v".to_string(), Value::Int(5))]);
        let value = value_from_ast(
            &schema,
            &type_of("Point"),
            &literal("{x: $v, color: RED}"),
            Some(&variables),
        ).unwrap();
        assert_eq!(value.to_json_string(), r#"{"x":5,"y":0,"color":"RED"}"#);

        assert!(value_from_ast(&schema, &type_of("Point"), &literal("{x: $v}"), None).is_none());
        assert!(value_from_ast(&schema, &type_of("Int!"), &literal("null"), None).is_none());
        assert!(value_from_ast(&schema, &type_of("Color"), &literal("\"RED\""), None).is_none());
    }

    /// Verifies that literal validation explains each problem and accepts
    /// variables anywhere.
    #[test]
    fn is_valid_literal_value_explains_problems() {
        let schema = schema();
        assert!(is_valid_literal_value(&schema, &type_of("Point"), &literal("{x: $v}")).is_empty());
        assert_eq!(
            is_valid_literal_value(&schema, &type_of("Int!"), &literal("null")),
            vec!["Expected \"Int!\", found null.".to_string()],
        );
        assert!(!is_valid_literal_value(&schema, &type_of("Point"), &literal("{y: 1}")).is_empty());
    }

    /// Verifies that values print back as literals of their type.
    #[test]
    fn ast_from_value_prints_enums_bare() {
        let schema = schema();
        let value = Value::from(serde_json::json!({"x": 1, "color": "GREEN"}));
        let ast = ast_from_value(&schema, &value, &type_of("Point")).unwrap();
        assert_eq!(print_value(&ast), "{x: 1, color: GREEN}");
        assert!(ast_from_value(&schema, &Value::Null, &type_of("Int!")).is_none());
    }
}

// =============================================================================
// Variables
// =============================================================================

mod variables {
    use super::*;
    use crate::tests::utils::parse_doc;

    fn coerce(
        body: &str,
        inputs: serde_json::Value,
    ) -> Result<IndexMap<String, Value>, crate::error::CoercionError> {
        let document = parse_doc(body);
        let operation = document.operations().next().unwrap();
        let Value::Object(inputs) = Value::from(inputs) else { unreachable!() };
        coerce_variable_values(&schema(), &operation.variable_definitions, &inputs)
    }

    /// Verifies that defaults apply only to absent variables and that
    /// absent nullable variables stay absent.
    #[test]
    fn applies_defaults() {
        let coerced = coerce(
            "query Q($a: Int = 1, $b: Int = 2, $c: Int) { f }",
            serde_json::json!({"b": null}),
        ).unwrap();
        assert_eq!(coerced.get("a"), Some(&Value::Int(1)));
        assert_eq!(coerced.get("b"), Some(&Value::Null));
        assert!(!coerced.contains_key("c"));
    }

    /// Verifies the messages for missing, null and mistyped variables.
    #[test]
    fn reports_bad_variables() {
        let missing = coerce("query Q($n: Int!) { f }", serde_json::json!({})).unwrap_err();
        assert_eq!(missing.message, "Variable \"$n\" of required type \"Int!\" was not provided.");
        assert_eq!(missing.locations.len(), 1);

        let null = coerce("query Q($n: Int!) { f }", serde_json::json!({"n": null})).unwrap_err();
        assert_eq!(null.message, "Variable \"$n\" of non-null type \"Int!\" must not be null.");

        let mistyped = coerce(
            "query Q($p: Point) { f(p: $p) }",
            serde_json::json!({"p": {"x": "one"}}),
        ).unwrap_err();
        assert_eq!(
            mistyped.message,
            "Variable \"$p\" expected value of type \"Point\" but got: {\"x\":\"one\"}.",
        );
        assert!(mistyped.cause.is_some());

        let output_type = coerce("query Q($q: Query) { f }", serde_json::json!({})).unwrap_err();
        assert_eq!(
            output_type.message,
            "Variable \"$q\" expected value of type \"Query\" which cannot be used as an input type.",
        );
    }
}
