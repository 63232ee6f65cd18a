use crate::{AsRecordId, Client, Error, Result, SObject, SaveFailure, SaveResult, Value};

/// Record writer over a [`Client`], turning unsuccessful saves into [`SaveFailure`] errors.
pub struct Writer<'c, C: Client> {
    client: &'c mut C,
}

impl<'c, C: Client> Writer<'c, C> {
    pub const FIELD_RECORD_TYPE_ID: &'static str = "RecordTypeId";

    pub fn new(client: &'c mut C) -> Self {
        Self { client }
    }

    /// Create a record of `object_type`, optionally forcing its record type.
    pub async fn create(
        &mut self,
        object_type: &str,
        values: impl Into<SObject>,
        record_type_id: Option<&str>,
    ) -> Result<SaveResult> {
        let mut object = values.into();
        if let Some(record_type_id) = record_type_id {
            object.set(Self::FIELD_RECORD_TYPE_ID, record_type_id);
        }
        let result = self.client.create_one(object, object_type).await?;
        Self::handle_result(result)
    }

    /// Update only the given fields of the record identified by `base`.
    pub async fn update<K, V>(
        &mut self,
        object_type: &str,
        base: impl AsRecordId,
        updates: impl IntoIterator<Item = (K, V)>,
    ) -> Result<SaveResult>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let object = Self::build_sobject(base.record_id(), updates);
        let result = self.client.update_one(object, object_type).await?;
        Self::handle_result(result)
    }

    /// A record with the given id (if any) and field values.
    pub fn build_sobject<K, V>(id: Option<&str>, values: impl IntoIterator<Item = (K, V)>) -> SObject
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut object: SObject = values.into_iter().collect();
        if let Some(id) = id {
            object.id = Some(id.into());
        }
        object
    }

    fn handle_result(result: SaveResult) -> Result<SaveResult> {
        if !result.success {
            let error = Error::new(SaveFailure { result });
            log::error!("{:#}", error);
            return Err(error);
        }
        Ok(result)
    }
}
