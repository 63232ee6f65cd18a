use crate::{ParamKey, Value};
use std::collections::HashMap;

/// Argument set bound to a template: placeholder key to value.
///
/// Binding follows the same fluent style used by prepared statements:
/// ```rust
/// use forcekit_core::{Args, ParamKey, Value};
/// let args = Args::new().bind("first").bind(2).bind_name("limit", 10);
/// assert_eq!(args.get(&ParamKey::Index(1)), Some(&Value::Int64(Some(2))));
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Args {
    values: HashMap<ParamKey, Value>,
    next_index: usize,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the next positional argument.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        let index = self.next_index;
        self.values.insert(ParamKey::Index(index), value.into());
        self.next_index = index + 1;
        self
    }

    /// Bind a positional argument at `index` (from 0).
    pub fn bind_index(mut self, value: impl Into<Value>, index: usize) -> Self {
        self.values.insert(ParamKey::Index(index), value.into());
        self.next_index = self.next_index.max(index + 1);
        self
    }

    /// Bind a named argument.
    pub fn bind_name(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(ParamKey::Name(name.into()), value.into());
        self
    }

    /// Bind a value to any key.
    pub fn set(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if let ParamKey::Index(index) = key {
            self.next_index = self.next_index.max(index + 1);
        }
        self.values.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &ParamKey) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &ParamKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &Value)> {
        self.values.iter()
    }

    /// A fresh argument set with `overrides` laid over `self`, neither side is modified.
    ///
    /// Keys present in both take the value of `overrides`, positional ones included.
    pub fn merged(&self, overrides: Option<&Args>) -> Args {
        let mut result = self.clone();
        if let Some(overrides) = overrides {
            for (key, value) in overrides.iter() {
                result.set(key.clone(), value.clone());
            }
        }
        result
    }
}

impl<V: Into<Value>> FromIterator<V> for Args {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        iter.into_iter().fold(Args::new(), |args, value| args.bind(value))
    }
}

impl<V: Into<Value>, const N: usize> From<[V; N]> for Args {
    fn from(value: [V; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<V: Into<Value>> From<Vec<V>> for Args {
    fn from(value: Vec<V>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<ParamKey>, V: Into<Value>> Extend<(K, V)> for Args {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<ParamKey>, V: Into<Value>> From<HashMap<K, V>> for Args {
    fn from(value: HashMap<K, V>) -> Self {
        let mut result = Args::new();
        result.extend(value);
        result
    }
}

/// Build an [`Args`] from positional values or from `name => value` pairs.
///
/// ```rust
/// use forcekit_core::args;
/// let positional = args!["a", 1, true];
/// let named = args! { "name" => "Acme", "limit" => 5 };
/// assert_eq!(positional.len(), 3);
/// assert_eq!(named.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Args::new()$(.bind_name($key, $value))+
    };
    ($($value:expr),* $(,)?) => {
        $crate::Args::new()$(.bind($value))*
    };
}
