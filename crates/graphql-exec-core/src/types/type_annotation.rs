use crate::schema::Schema;
use graphql_exec_parser::ast;

/// The declared type of a field, argument, input field or variable:
/// a named type or a list, each either nullable or non-null.
///
/// Non-null is a flag on each level rather than a wrapper, so a non-null
/// type can never wrap another non-null type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        name: String,
        nullable: bool,
    },
}

impl TypeAnnotation {
    /// A nullable reference to the type named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            nullable: true,
        }
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List {
            inner: Box::new(inner),
            nullable: true,
        }
    }

    /// This type, made non-null.
    pub fn non_null(self) -> Self {
        self.with_nullable(false)
    }

    /// This type with the outermost level made nullable.
    pub fn as_nullable(&self) -> Self {
        self.clone().with_nullable(true)
    }

    fn with_nullable(self, nullable: bool) -> Self {
        match self {
            Self::List { inner, .. } => Self::List { inner, nullable },
            Self::Named { name, .. } => Self::Named { name, nullable },
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }

    /// The element type, if this is a list.
    pub fn list_item(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::List { inner, .. } => Some(inner),
            Self::Named { .. } => None,
        }
    }

    /// The name of the innermost named type.
    pub fn innermost_name(&self) -> &str {
        let mut current = self;
        loop {
            match current {
                Self::List { inner, .. } => current = inner,
                Self::Named { name, .. } => return name,
            }
        }
    }

    pub fn from_ast(ast_type: &ast::Type) -> Self {
        match ast_type {
            ast::Type::Named(named) => Self::named(named.name.value.clone()),
            ast::Type::List(list) => Self::list(Self::from_ast(&list.item_type)),
            ast::Type::NonNull(non_null) => Self::from_ast(&non_null.inner_type).non_null(),
        }
    }

    /// Whether a value of this type can always be used where `other` is
    /// expected: same shape, at least as strict nullability at every level,
    /// and a named type that is `other`'s or one of its possible types.
    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        if self.nullable() && !other.nullable() {
            return false;
        }
        match (self, other) {
            (Self::List { inner: self_inner, .. }, Self::List { inner: other_inner, .. }) =>
                self_inner.is_subtype_of(schema, other_inner),
            (Self::Named { name: self_name, .. }, Self::Named { name: other_name, .. }) =>
                self_name == other_name || schema.is_possible_type(other_name, self_name),
            _ => false,
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, .. } => write!(f, "[{inner}]")?,
            Self::Named { name, .. } => f.write_str(name)?,
        }
        if !self.nullable() {
            f.write_str("!")?;
        }
        Ok(())
    }
}
