use forcekit_core::{
    ApiError, Client, DeleteResult, DescribeSObject, Result, SObject, SaveResult, UndeleteResult,
    UpsertResult, Value,
    stream::{self, Stream},
    truncate_long,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub object_type: String,
    pub record: SObject,
}

/// In memory stand-in for the remote API.
///
/// Queries are not interpreted: every query is recorded in `queries` and
/// yields the records in `rows`.
#[derive(Default, Debug)]
pub struct MemoryClient {
    pub records: BTreeMap<String, StoredRecord>,
    pub deleted: BTreeMap<String, StoredRecord>,
    pub describes: BTreeMap<String, DescribeSObject>,
    pub rows: Vec<SObject>,
    pub queries: Vec<String>,
    /// Every write comes back unsuccessful.
    pub reject_writes: bool,
    next_id: u64,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = SObject>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            ..Default::default()
        }
    }

    fn generate_id(&mut self) -> String {
        self.next_id += 1;
        format!("001{:012}", self.next_id)
    }

    fn rejection(id: Option<String>) -> SaveResult {
        SaveResult {
            id,
            success: false,
            errors: vec![ApiError {
                status_code: "FIELD_CUSTOM_VALIDATION_EXCEPTION".into(),
                message: "Writes are rejected".into(),
                fields: vec![],
            }],
        }
    }

    fn not_found(id: &str) -> ApiError {
        ApiError {
            status_code: "INVALID_CROSS_REFERENCE_KEY".into(),
            message: format!("Record {} does not exist", id),
            fields: vec![],
        }
    }

    fn insert(&mut self, mut object: SObject, object_type: &str) -> SaveResult {
        if self.reject_writes {
            return Self::rejection(None);
        }
        let id = self.generate_id();
        object.id = Some(id.clone());
        self.records.insert(
            id.clone(),
            StoredRecord {
                object_type: object_type.into(),
                record: object,
            },
        );
        SaveResult {
            id: Some(id),
            success: true,
            errors: vec![],
        }
    }

    fn modify(&mut self, object: SObject, object_type: &str) -> SaveResult {
        let id = object.id.clone().unwrap_or_default();
        if self.reject_writes {
            return Self::rejection(Some(id));
        }
        match self.records.get_mut(&id) {
            Some(stored) if stored.object_type == object_type => {
                stored.record.fields.extend(object.fields);
                SaveResult {
                    id: Some(id),
                    success: true,
                    errors: vec![],
                }
            }
            _ => SaveResult {
                errors: vec![Self::not_found(&id)],
                id: Some(id),
                success: false,
            },
        }
    }
}

impl Client for MemoryClient {
    fn raw_query(&mut self, query: String) -> impl Stream<Item = Result<SObject>> + Send {
        log::debug!("Running query: {}", truncate_long!(query));
        self.queries.push(query);
        stream::iter(self.rows.clone().into_iter().map(Ok))
    }

    async fn create(&mut self, objects: Vec<SObject>, object_type: &str) -> Result<Vec<SaveResult>> {
        Ok(objects
            .into_iter()
            .map(|object| self.insert(object, object_type))
            .collect())
    }

    async fn update(&mut self, objects: Vec<SObject>, object_type: &str) -> Result<Vec<SaveResult>> {
        Ok(objects
            .into_iter()
            .map(|object| self.modify(object, object_type))
            .collect())
    }

    async fn delete(&mut self, ids: Vec<String>) -> Result<Vec<DeleteResult>> {
        Ok(ids
            .into_iter()
            .map(|id| match self.records.remove(&id) {
                Some(stored) => {
                    self.deleted.insert(id.clone(), stored);
                    DeleteResult {
                        id: Some(id),
                        success: true,
                        errors: vec![],
                    }
                }
                None => DeleteResult {
                    errors: vec![Self::not_found(&id)],
                    id: Some(id),
                    success: false,
                },
            })
            .collect())
    }

    async fn undelete(&mut self, ids: Vec<String>) -> Result<Vec<UndeleteResult>> {
        Ok(ids
            .into_iter()
            .map(|id| match self.deleted.remove(&id) {
                Some(stored) => {
                    self.records.insert(id.clone(), stored);
                    UndeleteResult {
                        id: Some(id),
                        success: true,
                        errors: vec![],
                    }
                }
                None => UndeleteResult {
                    errors: vec![Self::not_found(&id)],
                    id: Some(id),
                    success: false,
                },
            })
            .collect())
    }

    async fn upsert(
        &mut self,
        external_id_field: &str,
        objects: Vec<SObject>,
        object_type: &str,
    ) -> Result<Vec<UpsertResult>> {
        let mut results = Vec::new();
        for mut object in objects {
            let key = object.get(external_id_field).cloned().unwrap_or(Value::Null);
            let existing = self
                .records
                .iter()
                .find(|(_, v)| {
                    v.object_type == object_type && v.record.get(external_id_field) == Some(&key)
                })
                .map(|(id, _)| id.clone());
            let created = existing.is_none();
            let result = match existing {
                Some(id) => {
                    object.id = Some(id);
                    self.modify(object, object_type)
                }
                None => self.insert(object, object_type),
            };
            results.push(UpsertResult {
                id: result.id,
                success: result.success,
                created: created && result.success,
                errors: result.errors,
            });
        }
        Ok(results)
    }

    async fn retrieve(
        &mut self,
        fields: &[&str],
        ids: Vec<String>,
        object_type: &str,
    ) -> Result<Vec<Option<SObject>>> {
        Ok(ids
            .iter()
            .map(|id| {
                let stored = self.records.get(id)?;
                if stored.object_type != object_type {
                    return None;
                }
                let mut record = SObject::with_id(id.clone());
                for field in fields {
                    if let Some(value) = stored.record.get(field) {
                        record.set(*field, value.clone());
                    }
                }
                Some(record)
            })
            .collect())
    }

    async fn describe_sobjects(&mut self, names: &[&str]) -> Result<Vec<DescribeSObject>> {
        Ok(names
            .iter()
            .filter_map(|name| self.describes.get(*name).cloned())
            .collect())
    }
}
