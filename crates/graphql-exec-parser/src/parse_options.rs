use crate::Source;
use std::sync::Arc;

/// Options that control what the [`GraphQLParser`](crate::GraphQLParser)
/// records on each AST node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Don't attach a [`Loc`](crate::ast::Loc) to any AST node.
    pub no_location: bool,

    /// Attach a [`Loc`](crate::ast::Loc) to AST nodes, but leave out the
    /// reference to the [`Source`].
    pub no_source: bool,
}

/// Input to [`parse()`](crate::parse).
#[derive(Clone, Debug)]
pub struct ParseParams {
    pub source: Arc<Source>,
    pub options: ParseOptions,
}

impl ParseParams {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            source: Arc::new(source.into()),
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }
}

impl std::convert::From<&str> for ParseParams {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl std::convert::From<String> for ParseParams {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl std::convert::From<Source> for ParseParams {
    fn from(source: Source) -> Self {
        Self::new(source)
    }
}

impl std::convert::From<Arc<Source>> for ParseParams {
    fn from(source: Arc<Source>) -> Self {
        Self {
            source,
            options: ParseOptions::default(),
        }
    }
}
