#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Customer record as handed over by the customer data source.
///
/// The card only reads these four fields and never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub company: String,
    /// Expected in 0..=100 but not enforced.
    pub health_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

impl Customer {
    pub fn new(name: impl Into<String>, company: impl Into<String>, health_score: f64) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            health_score,
            domains: None,
        }
    }

    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Associated domains, empty when the record carries none.
    pub fn domain_list(&self) -> &[String] {
        self.domains.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_record_without_domains() {
        let json = r#"{"name":"Q","company":"R","healthScore":95}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer, Customer::new("Q", "R", 95.0));
        assert!(customer.domain_list().is_empty());
    }

    #[test]
    fn decodes_record_with_domains() {
        let json = r#"{"name":"Bo","company":"X","healthScore":70,"domains":["a.com","b.com"]}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.health_score, 70.0);
        assert_eq!(customer.domain_list(), ["a.com", "b.com"]);
    }

    #[test]
    fn absent_and_empty_domains_look_the_same() {
        let absent = Customer::new("A", "B", 50.0);
        let empty = Customer::new("A", "B", 50.0).with_domains(Vec::<String>::new());

        assert_eq!(absent.domain_list(), empty.domain_list());
    }
}
