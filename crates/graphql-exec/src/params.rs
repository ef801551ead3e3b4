use crate::Request;
use graphql_exec_core::RequestContext;
use graphql_exec_core::Value;
use graphql_exec_core::schema::Schema;
use graphql_exec_parser::ast;
use graphql_exec_parser::ParseOptions;
use indexmap::IndexMap;
use std::sync::Arc;

/// Everything [`do_request()`](crate::do_request) needs to run one request.
#[derive(Clone, Debug)]
pub struct Params {
    pub schema: Arc<Schema>,

    /// The request document's text. Ignored when `ast` is set.
    pub request_string: String,

    /// An already parsed request document.
    pub ast: Option<Arc<ast::Document>>,

    pub parse_options: ParseOptions,

    /// Required when the document defines more than one operation.
    pub operation_name: Option<String>,

    pub variable_values: IndexMap<String, Value>,

    /// The `source` handed to root field resolvers.
    pub root_object: Value,

    pub context: RequestContext,
}

impl Params {
    pub fn new(schema: Arc<Schema>, request_string: impl Into<String>) -> Self {
        Self {
            schema,
            request_string: request_string.into(),
            ast: None,
            parse_options: ParseOptions::default(),
            operation_name: None,
            variable_values: IndexMap::new(),
            root_object: Value::Null,
            context: RequestContext::default(),
        }
    }

    /// Params for a document that was parsed ahead of time.
    pub fn from_ast(schema: Arc<Schema>, ast: Arc<ast::Document>) -> Self {
        Self {
            ast: Some(ast),
            ..Self::new(schema, String::new())
        }
    }

    /// Params for a decoded transport-level [`Request`].
    pub fn from_request(schema: Arc<Schema>, request: Request) -> Self {
        Self {
            operation_name: request.operation_name,
            variable_values: request.variables.unwrap_or_default(),
            ..Self::new(schema, request.query)
        }
    }

    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variable_values(mut self, variable_values: IndexMap<String, Value>) -> Self {
        self.variable_values = variable_values;
        self
    }

    pub fn with_root_object(mut self, root_object: impl Into<Value>) -> Self {
        self.root_object = root_object.into();
        self
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }
}
