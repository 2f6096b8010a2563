//! Tri-state field for partial updates
//!
//! JSON distinguishes a key that is absent from a key that is `null`. A plain
//! `Option<T>` folds both into `None`, so update payloads use [`Patch`]:
//!
//! | payload            | value             |
//! |--------------------|-------------------|
//! | key absent         | `Patch::Unchanged` |
//! | `"key": null`      | `Patch::Clear`     |
//! | `"key": value`     | `Patch::Set(value)` |
//!
//! Fields must carry `#[serde(default)]` so that an absent key falls back to
//! `Unchanged` instead of failing deserialization.

use serde::{Deserialize, Deserializer};

/// A sparse update to a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value as is
    Unchanged,
    /// Set the stored value to NULL
    Clear,
    /// Replace the stored value
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> Patch<T> {
    /// True when the caller did not mention the field
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when the caller supplied the field (either a value or null)
    #[inline]
    pub fn is_present(&self) -> bool {
        !self.is_unchanged()
    }

    /// The new value, if one was supplied
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Set(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Self::Unchanged => Patch::Unchanged,
            Self::Clear => Patch::Clear,
            Self::Set(v) => Patch::Set(v),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
        match self {
            Self::Unchanged => Patch::Unchanged,
            Self::Clear => Patch::Clear,
            Self::Set(v) => Patch::Set(f(v)),
        }
    }

    /// Fallible map, used to parse raw request values into domain types
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        match self {
            Self::Unchanged => Ok(Patch::Unchanged),
            Self::Clear => Ok(Patch::Clear),
            Self::Set(v) => f(v).map(Patch::Set),
        }
    }

    /// Resolve against the currently stored value
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::Clear => None,
            Self::Set(v) => Some(v),
        }
    }
}

impl Patch<String> {
    /// Treat an empty or whitespace-only string as a request to clear the field
    pub fn blank_as_clear(self) -> Self {
        match self {
            Self::Set(v) if v.trim().is_empty() => Self::Clear,
            other => other,
        }
    }

    /// Trim surrounding whitespace from a supplied value
    pub fn trimmed(self) -> Self {
        self.map(|v| v.trim().to_string())
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absent keys use Default.
        Option::<T>::deserialize(deserializer).map(|opt| opt.map_or(Self::Clear, Self::Set))
    }
}
