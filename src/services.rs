use crate::errors::LookupError;
use crate::models::PendencyRecord;
use std::path::Path;

/// Source of outstanding-debt records for a CPF.
///
/// Implementations may be backed by a remote bureau, a fixture file or a test
/// double. The analyzer only needs to know whether the lookup succeeded and
/// whether it returned anything.
pub trait PendencyLookupService: Send + Sync {
    /// Fetch every pendency registered against `cpf`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the underlying service cannot answer.
    fn find_pendencies_by_cpf(&self, cpf: &str) -> Result<Vec<PendencyRecord>, LookupError>;
}

/// Immutable in-memory pendency registry.
#[derive(Debug, Clone, Default)]
pub struct StaticPendencyRegistry {
    records: Vec<PendencyRecord>,
}

impl StaticPendencyRegistry {
    pub fn new(records: Vec<PendencyRecord>) -> Self {
        Self { records }
    }

    /// Load records from a JSON array of pendency objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read pendencies file {}: {}", path.display(), e)
        })?;

        let records: Vec<PendencyRecord> = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse pendencies file {}: {}", path.display(), e)
        })?;

        tracing::info!(
            "Loaded {} pendency records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PendencyLookupService for StaticPendencyRegistry {
    fn find_pendencies_by_cpf(&self, cpf: &str) -> Result<Vec<PendencyRecord>, LookupError> {
        let found: Vec<PendencyRecord> = self
            .records
            .iter()
            .filter(|record| record.cpf == cpf)
            .cloned()
            .collect();

        tracing::debug!("Registry: {} pendencies for CPF {}", found.len(), cpf);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::io::Write;
    use std::str::FromStr;

    fn record(cpf: &str, description: &str) -> PendencyRecord {
        PendencyRecord::new(
            cpf,
            "Cliente Teste",
            "Empresas ACME",
            description,
            BigDecimal::from_str("900.50").unwrap(),
        )
    }

    #[test]
    fn test_registry_filters_by_cpf_in_order() {
        let registry = StaticPendencyRegistry::new(vec![
            record("82226651209", "Parcela 1"),
            record("60487583752", "Outro cliente"),
            record("82226651209", "Parcela 2"),
        ]);

        let found = registry.find_pendencies_by_cpf("82226651209").unwrap();
        let descriptions: Vec<&str> = found.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Parcela 1", "Parcela 2"]);
    }

    #[test]
    fn test_registry_unknown_cpf_is_empty() {
        let registry = StaticPendencyRegistry::new(vec![record("82226651209", "Parcela")]);
        assert!(registry
            .find_pendencies_by_cpf("60487583752")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_registry_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "pendencies-{}.json",
            uuid::Uuid::new_v4()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"cpf":"82226651209","person_name":"Cliente Teste","claimant_name":"Empresas ACME","description":"Parcela não paga","amount":"900.50"}}]"#
        )
        .unwrap();

        let registry = StaticPendencyRegistry::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.find_pendencies_by_cpf("82226651209").unwrap()[0].amount,
            BigDecimal::from_str("900.5").unwrap()
        );
    }

    #[test]
    fn test_registry_missing_file_is_error() {
        let result = StaticPendencyRegistry::from_json_file("/nonexistent/pendencies.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_malformed_file_is_error() {
        let path = std::env::temp_dir().join(format!(
            "pendencies-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "{not json").unwrap();

        let result = StaticPendencyRegistry::from_json_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
