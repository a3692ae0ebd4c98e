use serde::{Deserialize, Deserializer};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// An input field that distinguishes "not sent" from "sent as null".
///
/// Use together with `#[serde(default)]` on the containing field: a missing
/// key falls back to [`TriState::Missing`], an explicit `null` deserializes
/// to [`TriState::Null`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TriState<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> TriState<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, TriState::Missing)
    }

    /// Collapse to the nullable column value under full-replace semantics.
    ///
    /// A missing field overwrites the column with `T::default()` (the empty
    /// string for text columns); an explicit `null` stores NULL.
    pub fn into_column(self) -> Option<T>
    where
        T: Default,
    {
        match self {
            TriState::Missing => Some(T::default()),
            TriState::Null => None,
            TriState::Value(v) => Some(v),
        }
    }
}

impl<'de, T> Deserialize<'de> for TriState<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => TriState::Value(v),
            None => TriState::Null,
        })
    }
}
