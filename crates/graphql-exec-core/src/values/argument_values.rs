use crate::error::CoercionError;
use crate::error::locations_of;
use crate::schema::Schema;
use crate::types::InputValue;
use crate::values::value_from_ast;
use crate::Value;
use graphql_exec_parser::ast;
use graphql_exec_parser::print_value;
use indexmap::IndexMap;

/// Coerces the arguments given to a field or directive.
///
/// Each argument takes its literal (resolving variables), then its default
/// value. An explicit `null` is kept; arguments with neither a value nor a
/// default are left out.
pub fn argument_values(
    schema: &Schema,
    definitions: &IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
    variables: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, CoercionError> {
    let mut coerced = IndexMap::with_capacity(definitions.len());
    for (arg_name, definition) in definitions {
        let arg_type = definition.type_annotation();
        let argument = arguments.iter().find(|arg| &arg.name.value == arg_name);

        let provided = match argument.map(|arg| &arg.value) {
            Some(ast::Value::Variable(variable)) => variables.get(&variable.name.value).cloned(),
            Some(literal) => {
                let value = value_from_ast(schema, arg_type, literal, Some(variables))
                    .ok_or_else(|| CoercionError::new(
                        format!(
                            "Argument \"{arg_name}\" has invalid value {}.",
                            print_value(literal),
                        ),
                        locations_of([literal.loc()]),
                    ))?;
                Some(value)
            },
            None => None,
        };

        match provided.or_else(|| definition.default_value().cloned()) {
            Some(value) if value.is_null() && !arg_type.nullable() => {
                return Err(CoercionError::new(
                    format!("Argument \"{arg_name}\" of non-null type \"{arg_type}\" must not be null."),
                    locations_of([argument.and_then(|arg| arg.loc.as_ref())]),
                ));
            },
            Some(value) => {
                coerced.insert(arg_name.clone(), value);
            },
            None if !arg_type.nullable() => {
                return Err(CoercionError::new(
                    format!("Argument \"{arg_name}\" of required type \"{arg_type}\" was not provided."),
                    locations_of([argument.and_then(|arg| arg.loc.as_ref())]),
                ));
            },
            None => (),
        }
    }
    Ok(coerced)
}
