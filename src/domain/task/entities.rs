use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{TaskDetails, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
  pub id: TaskId,
  pub title: String,
  pub description: String,
  pub due_date: Option<DateTime<Utc>>,
  pub status: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Task {
  pub fn new(details: TaskDetails, now: DateTime<Utc>) -> Self {
    Self {
      id: TaskId::new(),
      title: details.title,
      description: details.description,
      due_date: details.due_date,
      status: details.status,
      created_at: now,
      updated_at: now,
    }
  }

  /// Replaces every editable field
  pub fn apply(&mut self, details: TaskDetails, now: DateTime<Utc>) {
    self.title = details.title;
    self.description = details.description;
    self.due_date = details.due_date;
    self.status = details.status;
    self.updated_at = now;
  }
}
