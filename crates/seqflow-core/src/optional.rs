use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};

/// A value that is either present or absent.
///
/// Produced by terminal operations that may have nothing to return, such as a
/// seedless reduce over an empty pipeline. An absent value only turns into a
/// fallback through [`OptionalValue::or_else`] or [`OptionalValue::or_else_get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum OptionalValue<T> {
    Present(T),
    Absent,
}

impl<T> OptionalValue<T> {
    pub fn of(value: T) -> Self {
        Self::Present(value)
    }

    pub fn absent() -> Self {
        Self::Absent
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the contained value, failing with [`ValueError::Empty`] when absent.
    pub fn get(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ValueError::Empty.into()),
        }
    }

    /// Take the contained value, failing with [`ValueError::Empty`] when absent.
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ValueError::Empty.into()),
        }
    }

    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    pub fn or_else_get<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Run `action` on the contained value; no-op when absent.
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            action(value);
        }
    }

    pub fn map<U, F>(self, transform: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => OptionalValue::Present(transform(value)),
            Self::Absent => OptionalValue::Absent,
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    pub fn as_ref(&self) -> OptionalValue<&T> {
        match self {
            Self::Present(value) => OptionalValue::Present(value),
            Self::Absent => OptionalValue::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    fn from(value: OptionalValue<T>) -> Self {
        value.into_option()
    }
}
