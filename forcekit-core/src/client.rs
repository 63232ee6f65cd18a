use crate::{
    Args, AsQuery, AsRecordId, DeleteResult, DescribeSObject, Error, Result, SObject, SafeString,
    SaveResult, Template, UndeleteResult, UpsertResult, Value, Writer,
    future::{self, Future},
    stream::{self, Stream, StreamExt, TryStreamExt},
};
use std::pin::pin;

/// First entry of a batch response issued for a single record.
fn single<T>(results: Vec<T>, operation: &str) -> Result<T> {
    results.into_iter().next().ok_or_else(|| {
        let error = Error::msg(format!("The {} call returned no result", operation));
        log::error!("{:#}", error);
        error
    })
}

/// Capability of executing queries and record operations against the remote API.
///
/// The required methods are the batch operations of the underlying transport.
/// Everything else is provided on top of them: templated queries, escaping and
/// single record helpers.
pub trait Client: Send + Sized {
    /// Execute a finished query, yielding its records in a single forward pass.
    fn raw_query(&mut self, query: String) -> impl Stream<Item = Result<SObject>> + Send;

    fn create(
        &mut self,
        objects: Vec<SObject>,
        object_type: &str,
    ) -> impl Future<Output = Result<Vec<SaveResult>>> + Send;

    fn update(
        &mut self,
        objects: Vec<SObject>,
        object_type: &str,
    ) -> impl Future<Output = Result<Vec<SaveResult>>> + Send;

    fn delete(&mut self, ids: Vec<String>) -> impl Future<Output = Result<Vec<DeleteResult>>> + Send;

    fn undelete(
        &mut self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<Vec<UndeleteResult>>> + Send;

    fn upsert(
        &mut self,
        external_id_field: &str,
        objects: Vec<SObject>,
        object_type: &str,
    ) -> impl Future<Output = Result<Vec<UpsertResult>>> + Send;

    /// Fetch records by id, `None` for the ids that do not exist.
    fn retrieve(
        &mut self,
        fields: &[&str],
        ids: Vec<String>,
        object_type: &str,
    ) -> impl Future<Output = Result<Vec<Option<SObject>>>> + Send;

    fn describe_sobjects(
        &mut self,
        names: &[&str],
    ) -> impl Future<Output = Result<Vec<DescribeSObject>>> + Send;

    /// Parse a query once, to execute it many times with different arguments.
    fn prepare(&self, query: impl Into<String>, globals: impl Into<Args>) -> Template {
        Template::with_args(query, globals)
    }

    /// Bind the arguments and execute the query.
    ///
    /// A query that cannot be built yields its error as the only item.
    fn query<Q: AsQuery>(
        &mut self,
        query: Q,
        args: Option<&Args>,
    ) -> impl Stream<Item = Result<SObject>> + Send {
        let query = query.as_query();
        match query.as_ref().build(args) {
            Ok(soql) => self.raw_query(soql).left_stream(),
            Err(e) => {
                let e = e.context(format!("While building the query:\n{}", query.as_ref()));
                log::error!("{:#}", e);
                stream::once(future::ready(Err(e))).right_stream()
            }
        }
    }

    /// Execute the query and collect every record.
    fn query_all<Q: AsQuery>(
        &mut self,
        query: Q,
        args: Option<&Args>,
    ) -> impl Future<Output = Result<Vec<SObject>>> + Send {
        self.query(query, args).try_collect()
    }

    /// Execute the query and return its first record, if any.
    fn query_one<Q: AsQuery>(
        &mut self,
        query: Q,
        args: Option<&Args>,
    ) -> impl Future<Output = Result<Option<SObject>>> + Send {
        let stream = self.query(query, args);
        async move {
            let mut stream = pin!(stream);
            stream.try_next().await
        }
    }

    /// Escape a value for ad-hoc use in a query, see [`SafeString::escape`].
    fn escape(&self, value: impl Into<Value>, like: bool, quote: bool) -> SafeString {
        SafeString::escape(value, like, quote)
    }

    /// Create a new record, it must not have an `Id` yet.
    fn create_one(
        &mut self,
        object: SObject,
        object_type: &str,
    ) -> impl Future<Output = Result<SaveResult>> + Send {
        async move {
            if let Some(id) = object.id() {
                let error = Error::msg(format!(
                    "Cannot create a {} record that already has the Id {}",
                    object_type, id
                ));
                log::error!("{:#}", error);
                return Err(error);
            }
            single(self.create(vec![object], object_type).await?, "create")
        }
    }

    /// Update an existing record, it must have an `Id`.
    fn update_one(
        &mut self,
        object: SObject,
        object_type: &str,
    ) -> impl Future<Output = Result<SaveResult>> + Send {
        async move {
            if object.id().is_none() {
                let error = Error::msg(format!(
                    "Cannot update a {} record without an Id",
                    object_type
                ));
                log::error!("{:#}", error);
                return Err(error);
            }
            single(self.update(vec![object], object_type).await?, "update")
        }
    }

    /// Delete a record given its id or the record itself.
    fn delete_one(
        &mut self,
        id: impl AsRecordId,
    ) -> impl Future<Output = Result<DeleteResult>> + Send {
        let id = id.record_id().map(ToOwned::to_owned);
        async move {
            let Some(id) = id else {
                let error = Error::msg("Cannot delete a record without an Id");
                log::error!("{:#}", error);
                return Err(error);
            };
            single(self.delete(vec![id]).await?, "delete")
        }
    }

    fn undelete_one(&mut self, id: &str) -> impl Future<Output = Result<UndeleteResult>> + Send {
        async move { single(self.undelete(vec![id.to_owned()]).await?, "undelete") }
    }

    fn upsert_one(
        &mut self,
        external_id_field: &str,
        object: SObject,
        object_type: &str,
    ) -> impl Future<Output = Result<UpsertResult>> + Send {
        async move {
            single(
                self.upsert(external_id_field, vec![object], object_type)
                    .await?,
                "upsert",
            )
        }
    }

    /// Fetch one record by id, `None` if it does not exist.
    fn retrieve_one(
        &mut self,
        fields: &[&str],
        id: &str,
        object_type: &str,
    ) -> impl Future<Output = Result<Option<SObject>>> + Send {
        async move {
            Ok(self
                .retrieve(fields, vec![id.to_owned()], object_type)
                .await?
                .into_iter()
                .next()
                .flatten())
        }
    }

    fn describe_sobject(
        &mut self,
        name: &str,
    ) -> impl Future<Output = Result<Option<DescribeSObject>>> + Send {
        async move { Ok(self.describe_sobjects(&[name]).await?.into_iter().next()) }
    }

    /// Record writer raising on unsuccessful saves.
    fn writer(&mut self) -> Writer<'_, Self> {
        Writer::new(self)
    }
}
