use crate::domain::model::{
    ContactInformation, CustomAttributes, PersonPayload, PhoneNumber, SourceRow,
};

// Column headers as produced by the HR export.
pub const NAME_COLUMN: &str = "Nombre";
pub const ONBOARDING_COLUMN: &str = "onboarding_hr";
pub const PHONE_COLUMN: &str = "phone";

/// Maps every row to its API shape. Same length, same order; missing fields
/// fall back to defaults rather than failing the run.
pub fn build_payload(rows: &[SourceRow]) -> Vec<PersonPayload> {
    let payload: Vec<PersonPayload> = rows.iter().map(map_row).collect();
    tracing::info!("✅ Built payload with {} records", payload.len());
    payload
}

fn map_row(row: &SourceRow) -> PersonPayload {
    PersonPayload {
        first_name: row.get(NAME_COLUMN).unwrap_or_default().to_string(),
        custom_attributes: CustomAttributes {
            onboarding_hr: parse_onboarding_flag(row.get(ONBOARDING_COLUMN)),
        },
        contact_information: ContactInformation {
            phone: vec![PhoneNumber {
                number: row.get(PHONE_COLUMN).unwrap_or_default().to_string(),
            }],
        },
    }
}

fn parse_onboarding_flag(raw: Option<&str>) -> bool {
    raw.map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
