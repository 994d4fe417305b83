use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "people-sync")]
#[command(about = "Pushes contact records from a CSV file to the people API in batches")]
pub struct AppConfig {
    /// API credential, sent as `Authorization: App <key>`.
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API host, e.g. https://xyz.api.infobip.com
    #[arg(long, env = "BASE_URL")]
    pub base_url: String,

    /// Tabular source file with one contact per line.
    #[arg(long, env = "CSV_FILE")]
    pub csv_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AppConfig {
    /// Endpoint for batch person updates.
    pub fn persons_endpoint(&self) -> String {
        format!("{}/people/2/persons", self.base_url)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("csv_file", &self.csv_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str, base_url: &str, csv_file: &str) -> AppConfig {
        AppConfig {
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            csv_file: csv_file.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_persons_endpoint() {
        let config = config("key", "https://xyz.api.infobip.com", "contacts.csv");
        assert_eq!(
            config.persons_endpoint(),
            "https://xyz.api.infobip.com/people/2/persons"
        );
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(config("key", "https://example.com", "contacts.csv")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_api_key() {
        assert!(config("  ", "https://example.com", "contacts.csv")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        assert!(config("key", "not-a-url", "contacts.csv").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_csv_path() {
        assert!(config("key", "https://example.com", "").validate().is_err());
    }
}
