use chrono::{DateTime, Utc};

use crate::domain::auth::ports::Clock;

#[derive(Debug, Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}
