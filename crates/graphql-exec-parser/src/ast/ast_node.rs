use crate::ast::Loc;
use crate::ast::NodeKind;

/// Trait implemented by every AST node type.
///
/// All node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
pub trait AstNode {
    /// The discriminator identifying this node's variant.
    fn kind(&self) -> NodeKind;

    /// Where this node was parsed from, unless the document was parsed with
    /// [`ParseOptions::no_location`](crate::ParseOptions::no_location).
    fn loc(&self) -> Option<&Loc>;
}
