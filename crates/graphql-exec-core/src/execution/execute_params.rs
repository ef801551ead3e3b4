use crate::request_context::RequestContext;
use crate::schema::Schema;
use crate::Value;
use graphql_exec_parser::ast;
use indexmap::IndexMap;
use std::sync::Arc;

/// The inputs to executing an already parsed (and normally validated)
/// document.
#[derive(Clone, Debug)]
pub struct ExecuteParams {
    pub schema: Arc<Schema>,
    pub document: Arc<ast::Document>,

    /// Required when the document defines more than one operation.
    pub operation_name: Option<String>,

    /// Raw (uncoerced) variable values, keyed by variable name without the
    /// leading `$`.
    pub variable_values: IndexMap<String, Value>,

    /// The `source` handed to root field resolvers.
    pub root_value: Value,

    pub context: RequestContext,
}

impl ExecuteParams {
    pub fn new(schema: Arc<Schema>, document: Arc<ast::Document>) -> Self {
        Self {
            schema,
            document,
            operation_name: None,
            variable_values: IndexMap::new(),
            root_value: Value::Null,
            context: RequestContext::default(),
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variable_values(mut self, variable_values: IndexMap<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }

    pub fn with_root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }
}
