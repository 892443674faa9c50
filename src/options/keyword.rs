use serde::{Deserialize, Serialize};

/// Open keyword field: a member of the closed set `E`, or any
/// caller-supplied string as a forward-compatibility escape hatch.
///
/// Deserialization prefers the closed set; a string outside it lands in
/// [`OpenEnum::Custom`] verbatim. Non-string values are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenEnum<E> {
    Known(E),
    Custom(String),
}

impl<E> OpenEnum<E> {
    #[must_use]
    pub fn custom(value: impl Into<String>) -> Self {
        Self::Custom(value.into())
    }

    /// Returns the closed-set member, if this value is one.
    #[must_use]
    pub fn known(&self) -> Option<&E> {
        match self {
            Self::Known(member) => Some(member),
            Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl<E> From<E> for OpenEnum<E> {
    fn from(member: E) -> Self {
        Self::Known(member)
    }
}
