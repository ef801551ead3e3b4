use crate::schema::SchemaBuilder;
use crate::tests::utils::parse_doc;
use crate::tests::utils::pets_schema;
use crate::tests::utils::setup_logger;
use crate::validation::validate;
use crate::execute;
use crate::ExecuteParams;
use crate::Value;
use rayon::prelude::*;
use std::sync::Arc;

/// Verifies that one schema can be shared by validations running on many
/// threads, with each thread getting the same answer as a serial pass.
#[test]
fn validates_in_parallel_against_shared_schema() {
    setup_logger();
    let schema = pets_schema();
    let bodies: Vec<String> = (0..64)
        .map(|i| match i % 3 {
            0 => format!("{{ dog {{ name(surname: {}) }} }}", i % 2 == 0),
            1 => "{ dog { unknownField } }".to_string(),
            _ => format!("query Q{i}($x: Int) {{ complicatedArgs {{ intArgField(intArg: $x) }} }}"),
        })
        .collect();

    let serial: Vec<usize> = bodies
        .iter()
        .map(|body| validate(&schema, &parse_doc(body), None).len())
        .collect();
    let parallel: Vec<usize> = bodies
        .par_iter()
        .map(|body| validate(&schema, &parse_doc(body), None).len())
        .collect();

    assert_eq!(serial, parallel);
    assert!(parallel.iter().enumerate().all(|(i, count)| (*count == 1) == (i % 3 == 1)));
}

/// Verifies that concurrent requests against one schema each see their
/// own root value.
#[tokio::test(flavor = "multi_thread")]
async fn executes_concurrent_requests() {
    setup_logger();
    let schema = Arc::new(
        SchemaBuilder::new()
            .load_str("type Query { n: Int }")
            .unwrap()
            .build()
            .unwrap(),
    );
    let document = Arc::new(parse_doc("{ n }"));
    let handles: Vec<_> = (0..32)
        .map(|i| {
            let params = ExecuteParams::new(schema.clone(), document.clone())
                .with_root_value(Value::object([("n", Value::Int(i))]));
            tokio::spawn(execute(params))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        assert_eq!(result.data.unwrap().to_json_string(), format!("{{\"n\":{i}}}"));
    }
}
