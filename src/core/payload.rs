//! Log payloads: a single value or a (possibly nested) sequence of values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message handed to [`LogStore::log`](super::LogStore::log).
///
/// Sequences are flattened into one line by [`LogPayload::flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogPayload {
    Scalar(String),
    Sequence(Vec<LogPayload>),
}

impl LogPayload {
    /// Render any `Display` value as a scalar payload
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        LogPayload::Scalar(value.to_string())
    }

    /// Build a sequence from anything iterable
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LogPayload>,
    {
        LogPayload::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Flatten into a single line.
    ///
    /// Every sequence item is followed by one space, the last one included,
    /// so `["a", "b"]` renders as `"a b "`. Nested sequences follow the same
    /// rule recursively.
    #[must_use]
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            LogPayload::Scalar(s) => out.push_str(s),
            LogPayload::Sequence(items) => {
                for item in items {
                    item.flatten_into(out);
                    out.push(' ');
                }
            }
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, LogPayload::Sequence(_))
    }
}

impl fmt::Display for LogPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flatten())
    }
}

impl From<String> for LogPayload {
    fn from(s: String) -> Self {
        LogPayload::Scalar(s)
    }
}

impl From<&str> for LogPayload {
    fn from(s: &str) -> Self {
        LogPayload::Scalar(s.to_string())
    }
}

impl From<&String> for LogPayload {
    fn from(s: &String) -> Self {
        LogPayload::Scalar(s.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogPayload {
                fn from(value: $ty) -> Self {
                    LogPayload::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i32, i64, u32, u64, usize, f32, f64, bool, char);

impl<T: Into<LogPayload>> From<Vec<T>> for LogPayload {
    fn from(items: Vec<T>) -> Self {
        LogPayload::sequence(items)
    }
}

impl<T: Into<LogPayload>, const N: usize> From<[T; N]> for LogPayload {
    fn from(items: [T; N]) -> Self {
        LogPayload::sequence(items)
    }
}
