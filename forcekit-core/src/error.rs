use crate::{ParamKey, SaveResult};

/// A template placeholder had no argument after merging global and call arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Undefined query parameter \"{key}\"")]
pub struct MissingParameter {
    pub key: ParamKey,
}

/// A write operation came back unsuccessful.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Save failure: {}", result_id(.result))]
pub struct SaveFailure {
    pub result: SaveResult,
}

fn result_id(result: &SaveResult) -> &str {
    result.id.as_deref().unwrap_or_default()
}

impl SaveFailure {
    pub fn result(&self) -> &SaveResult {
        &self.result
    }
}
