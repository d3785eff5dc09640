use crate::util::normalize_upper;
use indexmap::IndexSet;

/// Normalized `allowed_methods` field: the wildcard sentinel or an ordered
/// set of upper-cased method tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedMethods {
    Any,
    List(IndexSet<String>),
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedMethods {
    /// Upper-cases every entry; a literal `*` anywhere collapses the field to
    /// [`AllowedMethods::Any`].
    pub fn normalize<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = IndexSet::new();

        for value in values {
            let value = value.as_ref();
            if value == "*" {
                return Self::Any;
            }
            methods.insert(normalize_upper(value));
        }

        Self::List(methods)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Membership test against the upper-cased candidate method.
    pub fn allows(&self, method: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(methods) => methods.contains(normalize_upper(method).as_str()),
        }
    }

    /// Comma-joined header line for the finite case.
    pub fn join(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(methods) => Some(
                methods
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
