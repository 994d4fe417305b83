use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record from the source file, keyed by column header.
#[derive(Debug, Clone, Default)]
pub struct SourceRow {
    pub fields: HashMap<String, String>,
}

impl SourceRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPayload {
    pub first_name: String,
    pub custom_attributes: CustomAttributes,
    pub contact_information: ContactInformation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributes {
    pub onboarding_hr: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    pub phone: Vec<PhoneNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

/// Status line and body of a completed HTTP exchange. `None` at the transport
/// seam means the request never completed.
#[derive(Debug, Clone)]
pub struct BatchResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Counters for one full processing pass. Only ever incremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub batches_attempted: usize,
    pub batches_succeeded: usize,
    pub records_updated: usize,
}
