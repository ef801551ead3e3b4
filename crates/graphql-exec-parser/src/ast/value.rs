use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::Loc;
use crate::ast::NodeKind;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use inherent::inherent;

/// A GraphQL input value.
///
/// Represents all possible GraphQL value literals as defined in the
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// section of the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// Whether this value is (or contains, at any depth) a variable
    /// reference.
    pub fn contains_variable(&self) -> bool {
        let mut stack = vec![self];
        while let Some(value) = stack.pop() {
            match value {
                Self::Variable(_) => return true,
                Self::List(list) => stack.extend(list.values.iter()),
                Self::Object(obj) => stack.extend(obj.fields.iter().map(|f| &f.value)),
                _ => (),
            }
        }
        false
    }
}

#[inherent]
impl AstNode for Value {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Variable(v) => v.kind(),
            Self::Int(v) => v.kind(),
            Self::Float(v) => v.kind(),
            Self::String(v) => v.kind(),
            Self::Boolean(v) => v.kind(),
            Self::Null(v) => v.kind(),
            Self::Enum(v) => v.kind(),
            Self::List(v) => v.kind(),
            Self::Object(v) => v.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Variable(v) => v.loc(),
            Self::Int(v) => v.loc(),
            Self::Float(v) => v.loc(),
            Self::String(v) => v.loc(),
            Self::Boolean(v) => v.loc(),
            Self::Null(v) => v.loc(),
            Self::Enum(v) => v.loc(),
            Self::List(v) => v.loc(),
            Self::Object(v) => v.loc(),
        }
    }
}
