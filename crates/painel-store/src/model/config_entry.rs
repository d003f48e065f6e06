use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::Record;

/// Free-form panel configuration entry (key/value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfigEntry {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

impl PanelConfigEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            key: key.into(),
            value: value.into(),
            created_at: Utc::now(),
        }
    }
}

impl Record for PanelConfigEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
