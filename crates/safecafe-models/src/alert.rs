//! Farm alerts.

use crate::status::AlertSeverity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One alert raised against the farm. Only `resolved` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub resolved: bool,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        !self.resolved
    }
}
