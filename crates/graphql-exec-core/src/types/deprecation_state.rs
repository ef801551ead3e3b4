/// Whether a field or enum value is deprecated, and why.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}

impl<'a> DeprecationState<'a> {
    pub(crate) fn from_reason(reason: Option<&'a str>) -> Self {
        match reason {
            Some(reason) => Self::Deprecated(reason),
            None => Self::NotDeprecated,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => Some(reason),
            Self::NotDeprecated => None,
        }
    }
}
