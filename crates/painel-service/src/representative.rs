//! Representative registration: phone validation plus duplicate
//! detection keyed on the canonical number.

use painel_engine::phone;
use painel_store::MemoryStore;
use painel_store::model::Representative;
use painel_store::repository::Repository;
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};

/// Form input for registering a representative.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRepresentative {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub brands: Vec<String>,
}

/// ## Summary
/// Validates the input, normalizes the phone number, rejects duplicates,
/// and stores the new representative.
///
/// ## Errors
/// - `ValidationError` when the name is blank.
/// - `PhoneError` when the phone number is rejected by the validator.
/// - `Conflict` when another representative already uses the same
///   canonical number.
pub fn register_representative(
    store: &MemoryStore,
    input: NewRepresentative,
) -> ServiceResult<Representative> {
    if input.name.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "representative name is required".to_string(),
        ));
    }

    let phone = phone::validate(&input.phone)?;

    let duplicate = store
        .representatives
        .list()
        .iter()
        .any(|existing| existing.phone == phone.as_str());
    if duplicate {
        return Err(ServiceError::Conflict(format!(
            "representative with phone {phone} already registered"
        )));
    }

    let representative = Representative::new(input.name, phone, input.brands);
    store.representatives.upsert(representative.clone());

    tracing::info!(
        representative_id = %representative.id,
        phone = %representative.phone,
        "representative registered"
    );

    Ok(representative)
}
