//! Various test utils.

use crate::error::ValidationError;
use crate::execute;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::validate;
use crate::ExecuteParams;
use crate::ExecutionResult;
use crate::Value;
use graphql_exec_parser::ast;
use graphql_exec_parser::parse;
use graphql_exec_parser::ParseParams;
use std::sync::Arc;
use std::sync::Once;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Routes `log`/`tracing` output to the test writer, at the level named by
/// the `LOG_LEVEL` environment variable.
pub fn setup_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let log_level = match std::env::var("LOG_LEVEL").as_deref().map(str::trim) {
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("WARN" | "warn") => tracing::Level::WARN,
            Ok("ERROR" | "error") => tracing::Level::ERROR,
            _ => DEFAULT_LOG_LEVEL,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// The schema the validation tests run against.
pub const PETS_SDL: &str = r#"
    interface Being {
      name(surname: Boolean): String
    }

    interface Pet {
      name(surname: Boolean): String
    }

    interface Canine {
      name(surname: Boolean): String
    }

    enum DogCommand { SIT, HEEL, DOWN }

    type Dog implements Being & Pet & Canine {
      name(surname: Boolean): String
      nickname: String
      barkVolume: Int
      barks: Boolean
      doesKnowCommand(dogCommand: DogCommand): Boolean
      isHousetrained(atOtherHomes: Boolean = true): Boolean
      isAtLocation(x: Int, y: Int): Boolean
    }

    type Cat implements Being & Pet {
      name(surname: Boolean): String
      nickname: String
      meows: Boolean
      meowVolume: Int
      furColor: FurColor
    }

    union CatOrDog = Dog | Cat

    interface Intelligent {
      iq: Int
    }

    type Human implements Being & Intelligent {
      name(surname: Boolean): String
      pets: [Pet]
      relatives: [Human]
      iq: Int
    }

    type Alien implements Being & Intelligent {
      iq: Int
      name(surname: Boolean): String
      numEyes: Int
    }

    union DogOrHuman = Dog | Human

    union HumanOrAlien = Human | Alien

    enum FurColor { BROWN, BLACK, TAN, SPOTTED }

    input ComplexInput {
      requiredField: Boolean!
      intField: Int
      stringField: String
      booleanField: Boolean
      stringListField: [String]
    }

    type ComplicatedArgs {
      intArgField(intArg: Int): String
      nonNullIntArgField(nonNullIntArg: Int!): String
      stringArgField(stringArg: String): String
      booleanArgField(booleanArg: Boolean): String
      enumArgField(enumArg: FurColor): String
      floatArgField(floatArg: Float): String
      idArgField(idArg: ID): String
      stringListArgField(stringListArg: [String]): String
      complexArgField(complexArg: ComplexInput): String
      multipleReqs(req1: Int!, req2: Int!): String
      multipleOpts(opt1: Int = 0, opt2: Int = 0): String
      multipleOptAndReq(req1: Int!, req2: Int!, opt1: Int = 0, opt2: Int = 0): String
    }

    type QueryRoot {
      human(id: ID): Human
      alien: Alien
      dog: Dog
      cat: Cat
      pet: Pet
      catOrDog: CatOrDog
      dogOrHuman: DogOrHuman
      humanOrAlien: HumanOrAlien
      complicatedArgs: ComplicatedArgs
    }

    directive @onQuery on QUERY
    directive @onField on FIELD

    schema {
      query: QueryRoot
    }
"#;

pub fn pets_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(PETS_SDL)
        .unwrap()
        .build()
        .unwrap()
}

pub fn parse_doc(body: &str) -> ast::Document {
    parse(ParseParams::from(body)).unwrap()
}

/// Validates `body` against the pets schema with every rule.
pub fn validate_pets(body: &str) -> Vec<ValidationError> {
    validate(&pets_schema(), &parse_doc(body), None)
}

/// The errors a single rule reports for `body`, as `(message, [(line,
/// column)])` pairs.
pub fn rule_errors(rule: &str, body: &str) -> Vec<(String, Vec<(usize, usize)>)> {
    validate_pets(body)
        .into_iter()
        .filter(|error| error.rule == rule)
        .map(|error| {
            let locations = error.locations
                .iter()
                .map(|loc| (loc.line, loc.column))
                .collect();
            (error.message, locations)
        })
        .collect()
}

pub fn assert_rule_passes(rule: &str, body: &str) {
    let errors = rule_errors(rule, body);
    assert!(errors.is_empty(), "expected no {rule} errors, got {errors:#?}");
}

/// `len` fragments on `type_name`, each `F{i}` spreading `F{i + 1}` and the
/// last selecting `leaf`.
pub fn fragment_chain(len: usize, type_name: &str, leaf: &str) -> String {
    let mut body = String::new();
    for i in 0..len {
        let selection = if i + 1 == len {
            leaf.to_string()
        } else {
            format!("...F{}", i + 1)
        };
        body.push_str(&format!("fragment F{i} on {type_name} {{ {selection} }}\n"));
    }
    body
}

/// Parses and executes `body` against `schema` with `root_value`.
pub async fn run(schema: Arc<Schema>, body: &str, root_value: Value) -> ExecutionResult {
    setup_logger();
    let params = ExecuteParams::new(schema, Arc::new(parse_doc(body)))
        .with_root_value(root_value);
    execute(params).await
}

/// The JSON text of a result's data.
pub fn data_json(result: &ExecutionResult) -> String {
    result.data.as_ref().map_or("<none>".to_string(), Value::to_json_string)
}
