/// Discriminator for every AST node variant.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Name,

    // Executable documents
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,

    // Values
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    Directive,

    // Type references
    NamedType,
    ListType,
    NonNullType,

    // Type system definitions
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarDefinition,
    ObjectDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceDefinition,
    UnionDefinition,
    EnumDefinition,
    EnumValueDefinition,
    InputObjectDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Document => "Document",
            Self::OperationDefinition => "OperationDefinition",
            Self::VariableDefinition => "VariableDefinition",
            Self::Variable => "Variable",
            Self::SelectionSet => "SelectionSet",
            Self::Field => "Field",
            Self::Argument => "Argument",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::IntValue => "IntValue",
            Self::FloatValue => "FloatValue",
            Self::StringValue => "StringValue",
            Self::BooleanValue => "BooleanValue",
            Self::NullValue => "NullValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::ObjectField => "ObjectField",
            Self::Directive => "Directive",
            Self::NamedType => "NamedType",
            Self::ListType => "ListType",
            Self::NonNullType => "NonNullType",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::OperationTypeDefinition => "OperationTypeDefinition",
            Self::ScalarDefinition => "ScalarDefinition",
            Self::ObjectDefinition => "ObjectDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceDefinition => "InterfaceDefinition",
            Self::UnionDefinition => "UnionDefinition",
            Self::EnumDefinition => "EnumDefinition",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::InputObjectDefinition => "InputObjectDefinition",
            Self::TypeExtensionDefinition => "TypeExtensionDefinition",
            Self::DirectiveDefinition => "DirectiveDefinition",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
