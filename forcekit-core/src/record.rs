use crate::{AsValue, Result, Value};
use std::collections::BTreeMap;

/// Field holding the record identifier.
pub const FIELD_ID: &str = "Id";

/// A record of the remote API: an optional id plus its field values.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SObject {
    pub id: Option<String>,
    pub fields: BTreeMap<String, Value>,
}

impl SObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Read a field converting it to `T`. A missing field reads as null.
    pub fn get_as<T: AsValue>(&self, field: &str) -> Result<T> {
        T::try_from_value(self.get(field).cloned().unwrap_or_default())
    }

    /// Set a field, setting `Id` updates the identifier instead.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let field = field.into();
        let value = value.into();
        if field == FIELD_ID {
            self.id = String::try_from_value(value).ok();
        } else {
            self.fields.insert(field, value);
        }
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut result = SObject::new();
        for (field, value) in iter {
            result.set(field, value);
        }
        result
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for SObject {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for SObject {
    fn from(value: Vec<(K, V)>) -> Self {
        value.into_iter().collect()
    }
}

/// Anything identifying a record: its id or the record itself.
pub trait AsRecordId {
    fn record_id(&self) -> Option<&str>;
}

impl AsRecordId for str {
    fn record_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsRecordId for String {
    fn record_id(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsRecordId for SObject {
    fn record_id(&self) -> Option<&str> {
        self.id()
    }
}

impl<T: AsRecordId + ?Sized> AsRecordId for &T {
    fn record_id(&self) -> Option<&str> {
        (**self).record_id()
    }
}

/// Error reported by the remote API for a single record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status_code: String,
    pub message: String,
    pub fields: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SaveResult {
    pub id: Option<String>,
    pub success: bool,
    pub errors: Vec<ApiError>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub id: Option<String>,
    pub success: bool,
    pub errors: Vec<ApiError>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct UndeleteResult {
    pub id: Option<String>,
    pub success: bool,
    pub errors: Vec<ApiError>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct UpsertResult {
    pub id: Option<String>,
    pub success: bool,
    /// True when the record was inserted rather than updated.
    pub created: bool,
    pub errors: Vec<ApiError>,
}

/// Field metadata from a describe call.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FieldDescribe {
    pub name: String,
    pub label: String,
    pub field_type: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DescribeSObject {
    pub name: String,
    pub label: String,
    pub fields: Vec<FieldDescribe>,
}

impl DescribeSObject {
    pub fn field(&self, name: &str) -> Option<&FieldDescribe> {
        self.fields.iter().find(|v| v.name == name)
    }
}
