use crate::domain::model::SourceRow;
use crate::utils::error::{Result, SyncError};
use chardetng::EncodingDetector;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Loads the source file into ordered rows, sniffing the text encoding from
/// the raw bytes first. HR exports arrive in whatever encoding the upstream
/// spreadsheet tool produced, so UTF-8 cannot be assumed.
pub fn read_rows(path: &Path) -> Result<Vec<SourceRow>> {
    if !path.exists() {
        return Err(SyncError::SourceFileMissing {
            path: path.display().to_string(),
        });
    }

    let bytes = fs::read(path)?;

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let guessed = detector.guess(None, true);
    // decode() re-checks for a BOM, so the encoding it reports is the one
    // actually applied.
    let (text, encoding, _) = guessed.decode(&bytes);
    tracing::info!("📂 Detected file encoding: {}", encoding.name());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = HashMap::with_capacity(headers.len());
        for (column, value) in headers.iter().zip(record.iter()) {
            fields.insert(column.to_string(), value.to_string());
        }
        rows.push(SourceRow { fields });
    }

    tracing::info!("📂 Read {} rows from '{}'", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.csv");
        fs::write(
            &path,
            "Nombre,onboarding_hr,phone\nAna,True,3001112222\nLuis,false,3003334444\n",
        )
        .unwrap();

        let rows = read_rows(&path).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Nombre"), Some("Ana"));
        assert_eq!(rows[0].get("onboarding_hr"), Some("True"));
        assert_eq!(rows[1].get("phone"), Some("3003334444"));
    }

    #[test]
    fn test_read_latin1_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.csv");
        // "José" with an ISO-8859-1 e-acute, invalid as UTF-8.
        fs::write(
            &path,
            b"Nombre,onboarding_hr,phone\nJos\xe9,true,3001112222\n",
        )
        .unwrap();

        let rows = read_rows(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("Nombre"), Some("José"));
    }

    #[test]
    fn test_read_preserves_row_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.csv");
        let mut content = String::from("Nombre,onboarding_hr,phone\n");
        for i in 0..50 {
            content.push_str(&format!("Person {},false,{}\n", i, i));
        }
        fs::write(&path, content).unwrap();

        let rows = read_rows(&path).unwrap();

        assert_eq!(rows.len(), 50);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.get("Nombre"), Some(format!("Person {}", i).as_str()));
        }
    }

    #[test]
    fn test_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does_not_exist.csv");

        let err = read_rows(&path).unwrap_err();

        assert!(matches!(err, SyncError::SourceFileMissing { .. }));
    }

    #[test]
    fn test_unparseable_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ragged.csv");
        fs::write(&path, "Nombre,onboarding_hr,phone\nAna,true\n").unwrap();

        let err = read_rows(&path).unwrap_err();

        assert!(matches!(err, SyncError::CsvError(_)));
    }

    #[test]
    fn test_missing_columns_yield_absent_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.csv");
        fs::write(&path, "Nombre\nAna\n").unwrap();

        let rows = read_rows(&path).unwrap();

        assert_eq!(rows[0].get("Nombre"), Some("Ana"));
        assert_eq!(rows[0].get("phone"), None);
    }
}
