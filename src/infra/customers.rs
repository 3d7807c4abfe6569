//! Customer data source: the embedded mock set or a JSON file chosen by configuration.

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{domain::Customer, util::assets};

const EMBEDDED_CUSTOMERS: &str = "customers.json";

#[derive(Debug, Error)]
pub enum CustomerDataError {
    #[error("embedded asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("failed to read customer file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse customer records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of loading customers, including a problem that forced a fallback.
#[derive(Debug)]
pub struct LoadedCustomers {
    pub customers: Vec<Customer>,
    pub fallback_reason: Option<CustomerDataError>,
}

pub fn parse_customers(json: &[u8]) -> Result<Vec<Customer>, CustomerDataError> {
    Ok(serde_json::from_slice(json)?)
}

pub fn embedded_customers() -> Result<Vec<Customer>, CustomerDataError> {
    let data = assets::load_asset(EMBEDDED_CUSTOMERS)
        .ok_or(CustomerDataError::MissingAsset(EMBEDDED_CUSTOMERS))?;
    parse_customers(&data)
}

pub fn customers_from_file(path: &Path) -> Result<Vec<Customer>, CustomerDataError> {
    let data = fs::read(path)?;
    parse_customers(&data)
}

/// Loads the override file when one is configured, falling back to the
/// embedded set if it cannot be read or parsed.
pub fn load_customers(override_path: Option<&Path>) -> Result<LoadedCustomers, CustomerDataError> {
    let Some(path) = override_path else {
        let customers = embedded_customers()?;
        tracing::info!("Loaded {} embedded customers", customers.len());
        return Ok(LoadedCustomers {
            customers,
            fallback_reason: None,
        });
    };

    match customers_from_file(path) {
        Ok(customers) => {
            tracing::info!("Loaded {} customers from {}", customers.len(), path.display());
            Ok(LoadedCustomers {
                customers,
                fallback_reason: None,
            })
        }
        Err(err) => {
            tracing::warn!(
                "Could not load customers from {}: {err}; using embedded set",
                path.display()
            );
            Ok(LoadedCustomers {
                customers: embedded_customers()?,
                fallback_reason: Some(err),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn embedded_set_parses() {
        let customers = embedded_customers().unwrap();
        assert!(!customers.is_empty());
        assert!(customers.iter().any(|c| c.domains.is_none()));
    }

    #[test]
    fn reads_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Jane Doe","company":"Acme","healthScore":25,"domains":["acme.com"]}}]"#
        )
        .unwrap();

        let loaded = load_customers(Some(file.path())).unwrap();

        assert!(loaded.fallback_reason.is_none());
        assert_eq!(
            loaded.customers,
            vec![Customer::new("Jane Doe", "Acme", 25.0).with_domains(["acme.com"])]
        );
    }

    #[test]
    fn malformed_override_falls_back_to_embedded_set() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let loaded = load_customers(Some(file.path())).unwrap();

        assert!(matches!(loaded.fallback_reason, Some(CustomerDataError::Parse(_))));
        assert_eq!(loaded.customers, embedded_customers().unwrap());
    }

    #[test]
    fn missing_override_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let loaded = load_customers(Some(missing.as_path())).unwrap();

        assert!(matches!(loaded.fallback_reason, Some(CustomerDataError::Io(_))));
    }
}
