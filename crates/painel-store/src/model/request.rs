use chrono::{DateTime, Utc};
use painel_engine::recurrence::ScheduleDescriptor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::Record;

/// A recurring message request: who gets what, how often.
///
/// The original backend called this collection "solic" (solicitações).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub id: Uuid,
    pub representative_id: Uuid,
    pub brand_id: Uuid,
    /// Message body with `{NOME_REP}` / `{MARCA}` / `{DATA_BASE}` tokens.
    pub template: String,
    pub schedule: ScheduleDescriptor,
    pub created_at: DateTime<Utc>,
}

impl MessageRequest {
    #[must_use]
    pub fn new(
        representative_id: Uuid,
        brand_id: Uuid,
        template: impl Into<String>,
        schedule: ScheduleDescriptor,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            representative_id,
            brand_id,
            template: template.into(),
            schedule,
            created_at: Utc::now(),
        }
    }
}

impl Record for MessageRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}
