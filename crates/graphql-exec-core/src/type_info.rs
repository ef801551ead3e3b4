use crate::schema::Schema;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use graphql_exec_parser::visitor::Node;

/// Tracks the schema types that correspond to the position of an AST
/// traversal.
///
/// Call [`TypeInfo::enter()`] before a visitor's own `enter` callback and
/// [`TypeInfo::leave()`] after its `leave` callback; in between, the
/// accessors describe the node being visited.
#[derive(Debug)]
pub struct TypeInfo<'s> {
    schema: &'s Schema,
    type_stack: Vec<Option<TypeAnnotation>>,
    parent_type_stack: Vec<Option<&'s GraphQLType>>,
    input_type_stack: Vec<Option<TypeAnnotation>>,
    field_def_stack: Vec<Option<&'s Field>>,
    directive: Option<&'s Directive>,
    argument: Option<&'s InputValue>,
}

impl<'s> TypeInfo<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            directive: None,
            argument: None,
        }
    }

    /// The output type of the current field, operation or fragment.
    pub fn type_(&self) -> Option<&TypeAnnotation> {
        self.type_stack.last().and_then(Option::as_ref)
    }

    /// The composite type whose selection set is being visited.
    pub fn parent_type(&self) -> Option<&'s GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    /// The expected type of the current argument, variable definition,
    /// list item or input object field.
    pub fn input_type(&self) -> Option<&TypeAnnotation> {
        self.input_type_stack.last().and_then(Option::as_ref)
    }

    /// The input type one level out from [`TypeInfo::input_type()`].
    pub fn parent_input_type(&self) -> Option<&TypeAnnotation> {
        let len = self.input_type_stack.len();
        if len < 2 {
            return None;
        }
        self.input_type_stack[len - 2].as_ref()
    }

    pub fn field_def(&self) -> Option<&'s Field> {
        self.field_def_stack.last().copied().flatten()
    }

    pub fn directive(&self) -> Option<&'s Directive> {
        self.directive
    }

    pub fn argument(&self) -> Option<&'s InputValue> {
        self.argument
    }

    fn named_type(&self, annotation: Option<&TypeAnnotation>) -> Option<&'s GraphQLType> {
        annotation.and_then(|annot| self.schema.get_type(annot.innermost_name()))
    }

    /// An annotation for `name`, if it names a type satisfying `accept`.
    fn type_named(
        &self,
        name: &str,
        accept: impl Fn(&GraphQLType) -> bool,
    ) -> Option<TypeAnnotation> {
        self.schema
            .get_type(name)
            .filter(|type_| accept(*type_))
            .map(|_| TypeAnnotation::named(name))
    }

    pub fn enter(&mut self, node: &Node<'_>) {
        let schema = self.schema;
        match node {
            Node::SelectionSet(_) => {
                let composite = self
                    .named_type(self.type_())
                    .filter(|type_| type_.is_composite());
                self.parent_type_stack.push(composite);
            },

            Node::Field(field) => {
                let field_def = self
                    .parent_type()
                    .and_then(|parent| schema.field_def(parent.name(), field.name.as_str()));
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_def.map(|def| def.type_annotation().clone()));
            },

            Node::Directive(directive) => {
                self.directive = schema.directive(directive.name.as_str());
            },

            Node::OperationDefinition(operation) => {
                let root = schema
                    .root_type(operation.operation)
                    .map(|root| TypeAnnotation::named(root.name()));
                self.type_stack.push(root);
            },

            Node::InlineFragment(fragment) => {
                let type_ = match &fragment.type_condition {
                    Some(cond) => self.type_named(cond.name.as_str(), GraphQLType::is_output_type),
                    None => self
                        .type_()
                        .map(|annot| TypeAnnotation::named(annot.innermost_name())),
                };
                self.type_stack.push(type_);
            },

            Node::FragmentDefinition(fragment) => {
                let type_ = self.type_named(
                    fragment.type_condition.name.as_str(),
                    GraphQLType::is_output_type,
                );
                self.type_stack.push(type_);
            },

            Node::VariableDefinition(definition) => {
                let annot = TypeAnnotation::from_ast(&definition.var_type);
                let input = schema
                    .get_type(annot.innermost_name())
                    .filter(|type_| type_.is_input_type())
                    .map(|_| annot);
                self.input_type_stack.push(input);
            },

            Node::Argument(argument) => {
                let name = argument.name.as_str();
                let arg_def = match self.directive {
                    Some(directive) => directive.argument(name),
                    None => self.field_def().and_then(|field| field.argument(name)),
                };
                self.argument = arg_def;
                self.input_type_stack.push(arg_def.map(|def| def.type_annotation().clone()));
            },

            Node::ListValue(_) => {
                let item = self
                    .input_type()
                    .map(|annot| annot.list_item().unwrap_or(annot).clone());
                self.input_type_stack.push(item);
            },

            Node::ObjectField(object_field) => {
                let field_type = self
                    .named_type(self.input_type())
                    .and_then(GraphQLType::as_input_object)
                    .and_then(|input_object| input_object.field(object_field.name.as_str()))
                    .map(|def| def.type_annotation().clone());
                self.input_type_stack.push(field_type);
            },

            _ => (),
        }
    }

    pub fn leave(&mut self, node: &Node<'_>) {
        match node {
            Node::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },
            Node::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            Node::Directive(_) => self.directive = None,
            Node::OperationDefinition(_)
            | Node::InlineFragment(_)
            | Node::FragmentDefinition(_) => {
                self.type_stack.pop();
            },
            Node::VariableDefinition(_) | Node::ListValue(_) | Node::ObjectField(_) => {
                self.input_type_stack.pop();
            },
            Node::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            },
            _ => (),
        }
    }
}
