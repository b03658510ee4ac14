use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::auth::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn parse(raw: &str) -> Result<Self, ValidationError> {
    Uuid::parse_str(raw)
      .map(Self)
      .map_err(|_| ValidationError::InvalidIdentifier)
  }

  pub fn from_uuid(uuid: Uuid) -> Self {
    Self(uuid)
  }

  pub fn into_inner(self) -> Uuid {
    self.0
  }
}

impl Default for TaskId {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for TaskId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Caller-editable task fields, checked for presence only
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetails {
  pub title: String,
  pub description: String,
  pub due_date: Option<DateTime<Utc>>,
  pub status: String,
}

impl TaskDetails {
  pub fn new(
    title: impl Into<String>,
    description: impl Into<String>,
    due_date: Option<DateTime<Utc>>,
    status: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    let title = title.into();
    let status = status.into();

    if title.trim().is_empty() {
      return Err(ValidationError::MissingField {
        field: "title".to_string(),
      });
    }
    if status.trim().is_empty() {
      return Err(ValidationError::MissingField {
        field: "status".to_string(),
      });
    }

    Ok(Self {
      title,
      description: description.into(),
      due_date,
      status,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_details_require_title_and_status() {
    assert!(TaskDetails::new("Write report", "", None, "pending").is_ok());

    match TaskDetails::new(" ", "desc", None, "pending") {
      Err(ValidationError::MissingField { field }) => assert_eq!(field, "title"),
      other => panic!("expected missing title, got {:?}", other),
    }
    match TaskDetails::new("Write report", "desc", None, "") {
      Err(ValidationError::MissingField { field }) => assert_eq!(field, "status"),
      other => panic!("expected missing status, got {:?}", other),
    }
  }

  #[test]
  fn test_task_id_parse() {
    let id = TaskId::new();
    assert_eq!(TaskId::parse(&id.to_string()).unwrap(), id);
    assert!(TaskId::parse("42").is_err());
  }
}
