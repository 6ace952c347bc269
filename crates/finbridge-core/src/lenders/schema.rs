use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Eligibility rules and headline terms for one lender.
///
/// Read-only reference data: rows come from a CSV table (or the embedded
/// default), never from the pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderRule {
    pub bank_id: u64,
    pub bank_name: String,
    /// Minimum GPA the lender accepts.
    pub min_gpa: Decimal,
    /// Family income ceiling for the lender's subsidized schemes.
    pub max_income: Decimal,
    /// Headline annual interest rate, percent.
    pub base_interest_rate: Decimal,
    #[serde(default = "default_max_loan_amount")]
    pub max_loan_amount: u64,
    #[serde(default = "default_approval_rate")]
    pub approval_rate: u32,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_max_loan_amount() -> u64 {
    500_000
}

fn default_approval_rate() -> u32 {
    90
}

fn default_description() -> String {
    "This bank offers education loans under PM-Vidyalaxmi and CSIS schemes.".to_string()
}
