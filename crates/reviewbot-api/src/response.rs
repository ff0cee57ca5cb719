//! Shape validation and extraction for API responses.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// One homework record as returned by the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Homework {
    /// Submission name shown in notifications.
    pub homework_name: String,
    /// Raw status code; parsed into a `ReviewStatus` by the watcher.
    pub status: String,
}

/// The validated payload of one poll.
#[derive(Debug, Clone)]
pub struct StatusBatch {
    homeworks: Vec<Value>,
    current_date: Option<i64>,
}

impl StatusBatch {
    /// Validate the decoded body and extract the homework list.
    ///
    /// The body must be an object carrying a `homeworks` list; each check
    /// failing maps to its own error variant so the operator can tell a
    /// missing key from a mistyped value.
    pub fn from_body(body: Value) -> Result<Self> {
        let object = body.as_object().ok_or(ApiError::NotAnObject)?;
        let homeworks = object
            .get("homeworks")
            .ok_or(ApiError::MissingHomeworks)?
            .as_array()
            .ok_or(ApiError::HomeworksNotList)?
            .clone();
        let current_date = object.get("current_date").and_then(Value::as_i64);

        Ok(Self {
            homeworks,
            current_date,
        })
    }

    /// Server-reported cursor for the next poll, when present.
    pub fn current_date(&self) -> Option<i64> {
        self.current_date
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.homeworks.len()
    }

    /// Whether the batch carries no records.
    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }

    /// The newest record, if any. Records past the first are never
    /// inspected.
    pub fn first(&self) -> Result<Option<Homework>> {
        match self.homeworks.first() {
            Some(record) => serde_json::from_value(record.clone())
                .map(Some)
                .map_err(ApiError::BadRecord),
            None => Ok(None),
        }
    }
}
