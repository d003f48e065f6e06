use chrono::{DateTime, Utc};
use painel_engine::phone::PhoneNumber;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::Record;

/// A brand representative and their validated contact number.
///
/// `phone` always holds the canonical digit-only form, which is also the
/// uniqueness key when registering new representatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representative {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Names of the brands this person represents, as entered in the form.
    pub brands: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Representative {
    #[must_use]
    pub fn new(name: impl Into<String>, phone: PhoneNumber, brands: Vec<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            phone: phone.into_string(),
            brands,
            created_at: Utc::now(),
        }
    }
}

impl Record for Representative {
    fn id(&self) -> Uuid {
        self.id
    }
}
