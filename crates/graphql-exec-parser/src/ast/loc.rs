use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// The byte range a node was parsed from.
///
/// `source` is `None` when the document was parsed with
/// [`ParseOptions::no_source`](crate::ParseOptions::no_source).
#[derive(Clone, Debug, PartialEq)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    pub source: Option<Arc<Source>>,
}

impl Loc {
    /// The line/column of the start of this node, if the source was kept.
    pub fn start_location(&self) -> Option<SourceLocation> {
        self.source.as_ref().map(|source| source.location_at(self.start))
    }
}
