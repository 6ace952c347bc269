use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One lender's fit against a borrower profile.
///
/// Derived and ephemeral: recomputed on every ranking request, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedLender {
    pub bank_id: u64,
    pub bank_name: String,
    /// Fit score in [0, 100].
    pub score: i32,
    /// Human-readable rationale for the score.
    pub why: String,
    /// Headline annual interest rate, percent.
    pub interest: Decimal,
    pub max_amount: u64,
    pub approval: u32,
    pub description: String,
}
