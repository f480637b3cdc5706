use crate::models::CreditStatus;
use crate::services::PendencyLookupService;
use crate::validation::is_valid_cpf;
use std::sync::Arc;

/// Classifies a CPF by the pendencies registered against it.
#[derive(Clone)]
pub struct CreditAnalyzer {
    lookup: Arc<dyn PendencyLookupService>,
}

impl CreditAnalyzer {
    /// Creates an analyzer backed by `lookup`.
    pub fn new(lookup: Arc<dyn PendencyLookupService>) -> Self {
        Self { lookup }
    }

    /// Check the credit status of a CPF
    ///
    /// Invalid input is rejected before any lookup. Lookup failures are
    /// reported as [`CreditStatus::CommunicationError`] and never retried, so
    /// the lookup service is called at most once per check.
    pub fn check_cpf_status(&self, cpf: &str) -> CreditStatus {
        if !is_valid_cpf(cpf) {
            tracing::warn!("❌ Invalid CPF format: {:?}", cpf);
            return CreditStatus::InvalidInput;
        }

        let status = match self.lookup.find_pendencies_by_cpf(cpf) {
            Err(e) => {
                tracing::error!("Pendency lookup failed for CPF {}: {}", cpf, e);
                CreditStatus::CommunicationError
            }
            Ok(pendencies) if pendencies.is_empty() => CreditStatus::NoPendencies,
            Ok(pendencies) => {
                tracing::debug!("CPF {} has {} pendencies", cpf, pendencies.len());
                CreditStatus::Delinquent
            }
        };

        tracing::info!("Credit status for CPF {}: {}", cpf, status);
        status
    }
}
