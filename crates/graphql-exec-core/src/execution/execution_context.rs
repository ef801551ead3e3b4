use crate::error::ExecutionError;
use crate::error::FieldError;
use crate::error::GraphQLError;
use crate::error::PathSegment;
use crate::execution::ExecuteParams;
use crate::request_context::RequestContext;
use crate::resolver::ResolveInfo;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::values::coerce_variable_values;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Per-request execution state.
///
/// Owned by a single request; the error list is locked so field tasks
/// running concurrently can append to it.
pub(crate) struct ExecutionContext {
    pub(crate) schema: Arc<Schema>,
    pub(crate) document: Arc<ast::Document>,
    pub(crate) operation: ast::OperationDefinition,
    pub(crate) root_value: Value,
    pub(crate) variable_values: IndexMap<String, Value>,
    pub(crate) context: RequestContext,
    /// Position of each fragment among the document's definitions.
    fragment_indices: Arc<HashMap<String, usize>>,
    errors: Mutex<Vec<FieldError>>,
}

/// The field being executed, shared by the resolver call and the
/// completion of its value.
pub(crate) struct FieldInfo<'f> {
    pub(crate) parent_type: &'f ObjectType,
    pub(crate) field_def: &'f Field,
    pub(crate) field_name: &'f str,

    /// Every occurrence merged under the field's response key.
    pub(crate) field_nodes: Vec<&'f ast::Field>,
}

impl ExecutionContext {
    /// Selects the operation and coerces its variables.
    pub(crate) fn build(params: &ExecuteParams) -> Result<Self, GraphQLError> {
        let operation = select_operation(&params.document, params.operation_name.as_deref())?;
        if params.schema.root_type(operation.operation).is_none() {
            return Err(ExecutionError::UnsupportedOperation {
                operation: operation.operation,
            }.into());
        }
        let variable_values = coerce_variable_values(
            &params.schema,
            &operation.variable_definitions,
            &params.variable_values,
        )?;
        log::debug!(
            "Executing {} {}",
            operation.operation.as_str(),
            operation.name.as_ref().map_or("<anonymous>", |name| name.as_str()),
        );
        let mut fragment_indices = HashMap::new();
        for (index, definition) in params.document.definitions.iter().enumerate() {
            if let ast::Definition::Fragment(fragment) = definition {
                fragment_indices.entry(fragment.name.value.clone()).or_insert(index);
            }
        }
        Ok(Self {
            schema: params.schema.clone(),
            document: params.document.clone(),
            operation: operation.clone(),
            root_value: params.root_value.clone(),
            variable_values,
            context: params.context.clone(),
            fragment_indices: Arc::new(fragment_indices),
            errors: Mutex::new(vec![]),
        })
    }

    /// A context for executing the same operation against another root
    /// value, with an empty error list.
    pub(crate) fn with_root_value(&self, root_value: Value) -> Self {
        Self {
            schema: self.schema.clone(),
            document: self.document.clone(),
            operation: self.operation.clone(),
            root_value,
            variable_values: self.variable_values.clone(),
            context: self.context.clone(),
            fragment_indices: self.fragment_indices.clone(),
            errors: Mutex::new(vec![]),
        }
    }

    pub(crate) fn root_type(&self) -> Option<&ObjectType> {
        self.schema.root_type(self.operation.operation)
    }

    pub(crate) fn fragment(&self, name: &str) -> Option<&ast::FragmentDefinition> {
        let index = *self.fragment_indices.get(name)?;
        match self.document.definitions.get(index)? {
            ast::Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub(crate) fn record_error(&self, error: FieldError) {
        log::debug!("Field error at {:?}: {}", error.path, error.message);
        self.errors.lock().unwrap_or_else(PoisonError::into_inner).push(error);
    }

    /// The errors recorded so far, in the order they were recorded.
    pub(crate) fn take_errors(&self) -> Vec<FieldError> {
        std::mem::take(&mut *self.errors.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn resolve_info<'r>(
        &'r self,
        field: &'r FieldInfo<'r>,
        path: &'r [PathSegment],
    ) -> ResolveInfo<'r> {
        ResolveInfo {
            field_name: field.field_name,
            field_nodes: &field.field_nodes,
            return_type: field.field_def.type_annotation(),
            parent_type: field.parent_type,
            path,
            schema: &self.schema,
            document: &self.document,
            operation: &self.operation,
            root_value: &self.root_value,
            variable_values: &self.variable_values,
        }
    }
}

/// Picks the operation named `operation_name`, or the document's only
/// operation when no name is given.
pub fn select_operation<'d>(
    document: &'d ast::Document,
    operation_name: Option<&str>,
) -> Result<&'d ast::OperationDefinition, ExecutionError> {
    match operation_name {
        Some(operation_name) => document
            .operations()
            .find(|op| op.name.as_ref().is_some_and(|name| name.value == operation_name))
            .ok_or_else(|| ExecutionError::UnknownOperation {
                operation_name: operation_name.to_string(),
            }),
        None => {
            let mut operations = document.operations();
            match (operations.next(), operations.next()) {
                (Some(operation), None) => Ok(operation),
                (None, _) => Err(ExecutionError::NoOperation),
                (Some(_), Some(_)) => Err(ExecutionError::OperationNameRequired),
            }
        },
    }
}
