/// One step of the path from the visit root to the current node: an index
/// into a list of siblings, or the name of a child field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathKey {
    Index(usize),
    Key(&'static str),
}

impl std::fmt::Display for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}
