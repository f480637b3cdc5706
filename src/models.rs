use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One outstanding debt reported against a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendencyRecord {
    /// CPF of the person who owes the debt.
    pub cpf: String,
    /// Name of the person who owes the debt.
    pub person_name: String,
    /// Name of the creditor that reported the debt.
    pub claimant_name: String,
    /// Free-text description of the debt.
    pub description: String,
    /// Amount owed.
    pub amount: BigDecimal,
}

impl PendencyRecord {
    pub fn new(
        cpf: impl Into<String>,
        person_name: impl Into<String>,
        claimant_name: impl Into<String>,
        description: impl Into<String>,
        amount: BigDecimal,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            person_name: person_name.into(),
            claimant_name: claimant_name.into(),
            description: description.into(),
            amount,
        }
    }
}

/// Outcome of a credit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// The CPF is not 11 digits; no lookup was made.
    InvalidInput,
    /// The pendency lookup could not be completed.
    CommunicationError,
    /// The lookup succeeded and found nothing.
    NoPendencies,
    /// The lookup found at least one pendency.
    Delinquent,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::InvalidInput => "INVALID_INPUT",
            CreditStatus::CommunicationError => "COMMUNICATION_ERROR",
            CreditStatus::NoPendencies => "NO_PENDENCIES",
            CreditStatus::Delinquent => "DELINQUENT",
        }
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/v1/credit/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditCheckRequest {
    /// CPF to analyze, exactly as received.
    pub cpf: String,
}

/// Response returned by both credit check endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCheckResponse {
    /// Identifier of this check, for correlating logs.
    pub check_id: Uuid,
    /// CPF as it was submitted.
    pub cpf: String,
    /// Analysis outcome.
    pub status: CreditStatus,
    /// When the analysis completed.
    pub checked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&CreditStatus::NoPendencies).unwrap();
        assert_eq!(json, "\"NO_PENDENCIES\"");

        let parsed: CreditStatus = serde_json::from_str("\"COMMUNICATION_ERROR\"").unwrap();
        assert_eq!(parsed, CreditStatus::CommunicationError);
    }

    #[test]
    fn test_status_display_matches_wire_name() {
        for status in [
            CreditStatus::InvalidInput,
            CreditStatus::CommunicationError,
            CreditStatus::NoPendencies,
            CreditStatus::Delinquent,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire.trim_matches('"'), status.to_string());
        }
    }

    #[test]
    fn test_pendency_record_from_json_keeps_exact_amount() {
        let record: PendencyRecord = serde_json::from_value(serde_json::json!({
            "cpf": "82226651209",
            "person_name": "Cliente Teste",
            "claimant_name": "Empresas ACME",
            "description": "Parcela não paga",
            "amount": "900.50"
        }))
        .unwrap();

        assert_eq!(record.cpf, "82226651209");
        assert_eq!(record.amount, BigDecimal::from_str("900.50").unwrap());
    }
}
