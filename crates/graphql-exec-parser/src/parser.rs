//! A recursive descent parser producing the [`ast`](crate::ast) for both
//! executable documents and the schema definition language.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::Lexer;
use crate::ParseOptions;
use crate::ParseParams;
use crate::Source;
use crate::SyntaxError;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyntaxError>;

/// Parses a complete document from the given source.
///
/// Stops and returns the first syntax error encountered.
pub fn parse(params: impl Into<ParseParams>) -> Result<ast::Document> {
    let params = params.into();
    let mut parser = GraphQLParser::new(&params.source, params.options)?;
    parser.parse_document()
}

/// Parses a single value literal (variables allowed), e.g. `[1, $x]`.
pub fn parse_value(params: impl Into<ParseParams>) -> Result<ast::Value> {
    let params = params.into();
    let mut parser = GraphQLParser::new(&params.source, params.options)?;
    let value = parser.parse_value_literal(ConstContext::AllowVariables)?;
    parser.expect(GraphQLTokenKind::Eof)?;
    Ok(value)
}

/// Parses a single type reference, e.g. `[String!]!`.
pub fn parse_type(params: impl Into<ParseParams>) -> Result<ast::Type> {
    let params = params.into();
    let mut parser = GraphQLParser::new(&params.source, params.options)?;
    let type_ref = parser.parse_type_reference()?;
    parser.expect(GraphQLTokenKind::Eof)?;
    Ok(type_ref)
}

/// Whether variables may appear in the value being parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ConstContext {
    /// Field and directive arguments within operations.
    AllowVariables,
    /// Variable default values, and argument/field defaults and directive
    /// arguments within type system definitions.
    Const,
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// The parser holds exactly one token of lookahead and reports the first
/// syntax error it encounters.
pub struct GraphQLParser<'src> {
    lexer: Lexer<'src>,
    source: &'src Arc<Source>,
    options: ParseOptions,

    /// The current (not yet consumed) token.
    token: GraphQLToken,

    /// End offset of the most recently consumed token.
    prev_end: usize,

    /// Shared nesting counter for selection sets, list/object values and
    /// list types.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum nesting depth for recursive parsing (values, selection sets
    /// and type references).
    const MAX_RECURSION_DEPTH: usize = 128;

    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token(0)?;
        Ok(Self {
            lexer,
            source,
            options,
            token,
            prev_end: 0,
            recursion_depth: 0,
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Moves to the next lexed token.
    fn advance(&mut self) -> Result<()> {
        self.prev_end = self.token.end;
        self.token = self.lexer.next_token(0)?;
        Ok(())
    }

    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.token.kind == kind
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.token.kind == GraphQLTokenKind::Name && self.token.value == keyword
    }

    /// Consumes the current token if it has the given kind.
    fn skip(&mut self, kind: GraphQLTokenKind) -> Result<bool> {
        if self.token.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes and returns the current token if it has the given kind,
    /// otherwise fails without consuming.
    fn expect(&mut self, kind: GraphQLTokenKind) -> Result<GraphQLToken> {
        if self.token.kind == kind {
            let token = self.token.clone();
            self.advance()?;
            return Ok(token);
        }
        Err(self.syntax_error(
            self.token.start,
            format!(
                "Expected {}, found {}",
                kind.description(),
                self.token.description(),
            ),
        ))
    }

    /// Consumes the current token if it's the given keyword, otherwise
    /// fails without consuming.
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken> {
        if self.peek_keyword(keyword) {
            let token = self.token.clone();
            self.advance()?;
            return Ok(token);
        }
        Err(self.syntax_error(
            self.token.start,
            format!(
                "Expected \"{keyword}\", found {}",
                self.token.description(),
            ),
        ))
    }

    fn unexpected(&self) -> SyntaxError {
        self.syntax_error(
            self.token.start,
            format!("Unexpected {}", self.token.description()),
        )
    }

    fn syntax_error(&self, position: usize, description: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.source, position, description)
    }

    /// Builds the [`ast::Loc`] for a node that started at `start` and ends
    /// with the most recently consumed token.
    fn loc(&self, start: usize) -> Option<ast::Loc> {
        if self.options.no_location {
            return None;
        }
        Some(ast::Loc {
            start,
            end: self.prev_end,
            source:
                if self.options.no_source {
                    None
                } else {
                    Some(Arc::clone(self.source))
                },
        })
    }

    /// Parses a possibly-empty list of nodes delimited by `open` and
    /// `close`.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_fn: fn(&mut Self) -> Result<T>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![];
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// Parses a non-empty list of nodes delimited by `open` and `close`.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        parse_fn: fn(&mut Self) -> Result<T>,
        close: GraphQLTokenKind,
    ) -> Result<Vec<T>> {
        self.expect(open)?;
        let mut nodes = vec![parse_fn(self)?];
        while !self.skip(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// Checks recursion depth and fails if the limit is exceeded. On
    /// success the caller must call `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > Self::MAX_RECURSION_DEPTH {
            return Err(self.syntax_error(
                self.token.start,
                "Exceeded maximum nesting depth",
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Parses definitions until EOF. An empty source yields an empty
    /// document.
    pub fn parse_document(&mut self) -> Result<ast::Document> {
        let start = self.token.start;
        let mut definitions = vec![];
        while !self.skip(GraphQLTokenKind::Eof)? {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document {
            definitions,
            loc: self.loc(start),
        })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition> {
        if self.peek(GraphQLTokenKind::BraceL) {
            return Ok(ast::Definition::Operation(self.parse_operation_definition()?));
        }
        if !self.peek(GraphQLTokenKind::Name) {
            return Err(self.unexpected());
        }
        Ok(match self.token.value.as_str() {
            "query" | "mutation" | "subscription" =>
                ast::Definition::Operation(self.parse_operation_definition()?),
            "fragment" =>
                ast::Definition::Fragment(self.parse_fragment_definition()?),
            "schema" =>
                ast::Definition::Schema(self.parse_schema_definition()?),
            "scalar" =>
                ast::Definition::Scalar(self.parse_scalar_definition()?),
            "type" =>
                ast::Definition::Object(self.parse_object_definition()?),
            "interface" =>
                ast::Definition::Interface(self.parse_interface_definition()?),
            "union" =>
                ast::Definition::Union(self.parse_union_definition()?),
            "enum" =>
                ast::Definition::Enum(self.parse_enum_definition()?),
            "input" =>
                ast::Definition::InputObject(self.parse_input_object_definition()?),
            "extend" =>
                ast::Definition::TypeExtension(self.parse_type_extension_definition()?),
            "directive" =>
                ast::Definition::Directive(self.parse_directive_definition()?),
            _ => return Err(self.unexpected()),
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_name(&mut self) -> Result<ast::Name> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(ast::Name {
            value: token.value,
            loc: self.loc(token.start),
        })
    }

    fn parse_operation_definition(&mut self) -> Result<ast::OperationDefinition> {
        let start = self.token.start;
        if self.peek(GraphQLTokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationType::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation_token = self.expect(GraphQLTokenKind::Name)?;
        let operation = ast::OperationType::from_keyword(&operation_token.value)
            .ok_or_else(|| self.syntax_error(
                operation_token.start,
                format!("Unexpected {}", operation_token.description()),
            ))?;
        let name =
            if self.peek(GraphQLTokenKind::Name) {
                Some(self.parse_name()?)
            } else {
                None
            };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>> {
        if !self.peek(GraphQLTokenKind::ParenL) {
            return Ok(vec![]);
        }
        self.many(
            GraphQLTokenKind::ParenL,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenR,
        )
    }

    fn parse_variable_definition(&mut self) -> Result<ast::VariableDefinition> {
        let start = self.token.start;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value =
            if self.skip(GraphQLTokenKind::Equals)? {
                Some(self.parse_value_literal(ConstContext::Const)?)
            } else {
                None
            };
        Ok(ast::VariableDefinition {
            variable,
            var_type,
            default_value,
            loc: self.loc(start),
        })
    }

    fn parse_variable(&mut self) -> Result<ast::Variable> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::Variable {
            name,
            loc: self.loc(start),
        })
    }

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet> {
        let start = self.token.start;
        self.enter_recursion()?;
        let selections = self.many(
            GraphQLTokenKind::BraceL,
            Self::parse_selection,
            GraphQLTokenKind::BraceR,
        );
        self.exit_recursion();
        Ok(ast::SelectionSet {
            selections: selections?,
            loc: self.loc(start),
        })
    }

    fn parse_selection(&mut self) -> Result<ast::Selection> {
        if self.peek(GraphQLTokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(ast::Selection::Field(self.parse_field()?))
        }
    }

    /// ```text
    /// Field : Alias? Name Arguments? Directives? SelectionSet?
    /// Alias : Name :
    /// ```
    fn parse_field(&mut self) -> Result<ast::Field> {
        let start = self.token.start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) =
            if self.skip(GraphQLTokenKind::Colon)? {
                (Some(name_or_alias), self.parse_name()?)
            } else {
                (None, name_or_alias)
            };
        let arguments = self.parse_arguments(ConstContext::AllowVariables)?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set =
            if self.peek(GraphQLTokenKind::BraceL) {
                Some(self.parse_selection_set()?)
            } else {
                None
            };
        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self, context: ConstContext) -> Result<Vec<ast::Argument>> {
        if !self.peek(GraphQLTokenKind::ParenL) {
            return Ok(vec![]);
        }
        let parse_fn =
            match context {
                ConstContext::AllowVariables => Self::parse_argument,
                ConstContext::Const => Self::parse_const_argument,
            };
        self.many(GraphQLTokenKind::ParenL, parse_fn, GraphQLTokenKind::ParenR)
    }

    fn parse_argument(&mut self) -> Result<ast::Argument> {
        self.parse_argument_impl(ConstContext::AllowVariables)
    }

    fn parse_const_argument(&mut self) -> Result<ast::Argument> {
        self.parse_argument_impl(ConstContext::Const)
    }

    fn parse_argument_impl(&mut self, context: ConstContext) -> Result<ast::Argument> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(context)?;
        Ok(ast::Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// ```text
    /// FragmentSpread : ... FragmentName Directives?
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    /// ```
    fn parse_fragment(&mut self) -> Result<ast::Selection> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::Spread)?;

        if self.peek(GraphQLTokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition =
            if self.peek_keyword("on") {
                self.advance()?;
                Some(self.parse_named_type()?)
            } else {
                None
            };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_fragment_definition(&mut self) -> Result<ast::FragmentDefinition> {
        let start = self.token.start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> Result<ast::Name> {
        if self.peek_keyword("on") {
            return Err(self.unexpected());
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value_literal(&mut self, context: ConstContext) -> Result<ast::Value> {
        let start = self.token.start;
        match self.token.kind {
            GraphQLTokenKind::BracketL => {
                self.enter_recursion()?;
                let list = self.parse_list(context);
                self.exit_recursion();
                Ok(ast::Value::List(list?))
            },
            GraphQLTokenKind::BraceL => {
                self.enter_recursion()?;
                let object = self.parse_object(context);
                self.exit_recursion();
                Ok(ast::Value::Object(object?))
            },
            GraphQLTokenKind::Int => {
                let token = self.expect(GraphQLTokenKind::Int)?;
                Ok(ast::Value::Int(ast::IntValue {
                    value: token.value,
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::Float => {
                let token = self.expect(GraphQLTokenKind::Float)?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value: token.value,
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::String => {
                let token = self.expect(GraphQLTokenKind::String)?;
                Ok(ast::Value::String(ast::StringValue {
                    value: token.value,
                    loc: self.loc(start),
                }))
            },
            GraphQLTokenKind::Name => {
                let token = self.expect(GraphQLTokenKind::Name)?;
                let loc = self.loc(start);
                Ok(match token.value.as_str() {
                    "true" => ast::Value::Boolean(ast::BooleanValue { value: true, loc }),
                    "false" => ast::Value::Boolean(ast::BooleanValue { value: false, loc }),
                    "null" => ast::Value::Null(ast::NullValue { loc }),
                    _ => ast::Value::Enum(ast::EnumValue { value: token.value, loc }),
                })
            },
            GraphQLTokenKind::Dollar if context == ConstContext::AllowVariables =>
                Ok(ast::Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_list(&mut self, context: ConstContext) -> Result<ast::ListValue> {
        let start = self.token.start;
        let parse_fn: fn(&mut Self) -> Result<ast::Value> =
            match context {
                ConstContext::AllowVariables =>
                    |parser| parser.parse_value_literal(ConstContext::AllowVariables),
                ConstContext::Const =>
                    |parser| parser.parse_value_literal(ConstContext::Const),
            };
        let values = self.any(
            GraphQLTokenKind::BracketL,
            parse_fn,
            GraphQLTokenKind::BracketR,
        )?;
        Ok(ast::ListValue {
            values,
            loc: self.loc(start),
        })
    }

    fn parse_object(&mut self, context: ConstContext) -> Result<ast::ObjectValue> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::BraceL)?;
        let mut fields = vec![];
        while !self.skip(GraphQLTokenKind::BraceR)? {
            fields.push(self.parse_object_field(context)?);
        }
        Ok(ast::ObjectValue {
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_object_field(&mut self, context: ConstContext) -> Result<ast::ObjectField> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(context)?;
        Ok(ast::ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self, context: ConstContext) -> Result<Vec<ast::Directive>> {
        let mut directives = vec![];
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive(context)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, context: ConstContext) -> Result<ast::Directive> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(context)?;
        Ok(ast::Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// ```text
    /// Type : NamedType | ListType | NonNullType
    /// ```
    fn parse_type_reference(&mut self) -> Result<ast::Type> {
        let start = self.token.start;
        let type_ref =
            if self.skip(GraphQLTokenKind::BracketL)? {
                self.enter_recursion()?;
                let item_type = self.parse_type_reference();
                self.exit_recursion();
                let item_type = item_type?;
                self.expect(GraphQLTokenKind::BracketR)?;
                ast::Type::List(ast::ListType {
                    item_type: Box::new(item_type),
                    loc: self.loc(start),
                })
            } else {
                ast::Type::Named(self.parse_named_type()?)
            };

        if self.skip(GraphQLTokenKind::Bang)? {
            return Ok(ast::Type::NonNull(ast::NonNullType {
                inner_type: Box::new(type_ref),
                loc: self.loc(start),
            }));
        }
        Ok(type_ref)
    }

    fn parse_named_type(&mut self) -> Result<ast::NamedType> {
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// ```text
    /// SchemaDefinition : schema Directives? { OperationTypeDefinition+ }
    /// ```
    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition> {
        let start = self.token.start;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::Const)?;
        let operation_types = self.many(
            GraphQLTokenKind::BraceL,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(ast::SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type_definition(&mut self) -> Result<ast::OperationTypeDefinition> {
        let start = self.token.start;
        let operation_token = self.expect(GraphQLTokenKind::Name)?;
        let operation = ast::OperationType::from_keyword(&operation_token.value)
            .ok_or_else(|| self.syntax_error(
                operation_token.start,
                format!("Unexpected {}", operation_token.description()),
            ))?;
        self.expect(GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            named_type,
            loc: self.loc(start),
        })
    }

    fn parse_scalar_definition(&mut self) -> Result<ast::ScalarDefinition> {
        let start = self.token.start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        Ok(ast::ScalarDefinition {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// ObjectTypeDefinition :
    ///   type Name ImplementsInterfaces? Directives? FieldsDefinition?
    /// ```
    fn parse_object_definition(&mut self) -> Result<ast::ObjectDefinition> {
        let start = self.token.start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectDefinition {
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// Accepts both `implements A & B` and the older `implements A, B` (or
    /// `implements A B`) forms.
    fn parse_implements_interfaces(&mut self) -> Result<Vec<ast::NamedType>> {
        let mut interfaces = vec![];
        if !self.peek_keyword("implements") {
            return Ok(interfaces);
        }
        self.advance()?;
        // Optional leading `&`.
        self.skip(GraphQLTokenKind::Amp)?;
        interfaces.push(self.parse_named_type()?);
        loop {
            if self.skip(GraphQLTokenKind::Amp)? {
                interfaces.push(self.parse_named_type()?);
            } else if self.peek(GraphQLTokenKind::Name) {
                interfaces.push(self.parse_named_type()?);
            } else {
                break;
            }
        }
        Ok(interfaces)
    }

    fn parse_fields_definition(&mut self) -> Result<Vec<ast::FieldDefinition>> {
        if !self.peek(GraphQLTokenKind::BraceL) {
            return Ok(vec![]);
        }
        self.any(
            GraphQLTokenKind::BraceL,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceR,
        )
    }

    fn parse_field_definition(&mut self) -> Result<ast::FieldDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        Ok(ast::FieldDefinition {
            name,
            arguments,
            field_type,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_argument_defs(&mut self) -> Result<Vec<ast::InputValueDefinition>> {
        if !self.peek(GraphQLTokenKind::ParenL) {
            return Ok(vec![]);
        }
        self.many(
            GraphQLTokenKind::ParenL,
            Self::parse_input_value_def,
            GraphQLTokenKind::ParenR,
        )
    }

    fn parse_input_value_def(&mut self) -> Result<ast::InputValueDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value =
            if self.skip(GraphQLTokenKind::Equals)? {
                Some(self.parse_value_literal(ConstContext::Const)?)
            } else {
                None
            };
        let directives = self.parse_directives(ConstContext::Const)?;
        Ok(ast::InputValueDefinition {
            name,
            value_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_interface_definition(&mut self) -> Result<ast::InterfaceDefinition> {
        let start = self.token.start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceDefinition {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// UnionTypeDefinition : union Name Directives? = |? NamedType (| NamedType)*
    /// ```
    fn parse_union_definition(&mut self) -> Result<ast::UnionDefinition> {
        let start = self.token.start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        self.expect(GraphQLTokenKind::Equals)?;
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut types = vec![self.parse_named_type()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            types.push(self.parse_named_type()?);
        }
        Ok(ast::UnionDefinition {
            name,
            directives,
            types,
            loc: self.loc(start),
        })
    }

    fn parse_enum_definition(&mut self) -> Result<ast::EnumDefinition> {
        let start = self.token.start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        let values = self.many(
            GraphQLTokenKind::BraceL,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::BraceR,
        )?;
        Ok(ast::EnumDefinition {
            name,
            directives,
            values,
            loc: self.loc(start),
        })
    }

    fn parse_enum_value_definition(&mut self) -> Result<ast::EnumValueDefinition> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        Ok(ast::EnumValueDefinition {
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_input_object_definition(&mut self) -> Result<ast::InputObjectDefinition> {
        let start = self.token.start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::Const)?;
        let fields =
            if self.peek(GraphQLTokenKind::BraceL) {
                self.any(
                    GraphQLTokenKind::BraceL,
                    Self::parse_input_value_def,
                    GraphQLTokenKind::BraceR,
                )?
            } else {
                vec![]
            };
        Ok(ast::InputObjectDefinition {
            name,
            directives,
            fields,
            loc: self.loc(start),
        })
    }

    fn parse_type_extension_definition(&mut self) -> Result<ast::TypeExtensionDefinition> {
        let start = self.token.start;
        self.expect_keyword("extend")?;
        let definition = self.parse_object_definition()?;
        Ok(ast::TypeExtensionDefinition {
            definition,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// DirectiveDefinition :
    ///   directive @ Name ArgumentsDefinition? repeatable? on |? Location (| Location)*
    /// ```
    fn parse_directive_definition(&mut self) -> Result<ast::DirectiveDefinition> {
        let start = self.token.start;
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable =
            if self.peek_keyword("repeatable") {
                self.advance()?;
                true
            } else {
                false
            };
        self.expect_keyword("on")?;
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut locations = vec![self.parse_name()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            locations.push(self.parse_name()?);
        }
        Ok(ast::DirectiveDefinition {
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        })
    }
}
