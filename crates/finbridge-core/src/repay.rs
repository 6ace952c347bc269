use serde::{Deserialize, Serialize};

/// A computed repayment schedule summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSummary {
    /// Fixed monthly installment, rounded to 2 decimals.
    pub emi: f64,
    pub months: u32,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Fixed monthly installment under standard amortization, rounded to
/// 2 decimals.
///
/// Degenerate inputs (non-positive principal, rate or tenure) yield 0 by
/// contract rather than an error; that guard also keeps the denominator
/// away from zero.
pub fn monthly_installment(principal: f64, annual_rate_pct: f64, tenure_years: f64) -> f64 {
    if principal <= 0.0 || annual_rate_pct <= 0.0 || tenure_years <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let months = tenure_years * 12.0;

    let growth = (1.0 + monthly_rate).powf(months);
    round2(principal * monthly_rate * growth / (growth - 1.0))
}

/// Full schedule summary for a new loan.
pub fn repayment_summary(principal: f64, annual_rate_pct: f64, tenure_years: u32) -> RepaymentSummary {
    let months = tenure_years * 12;
    let emi = monthly_installment(principal, annual_rate_pct, tenure_years as f64);
    let total_payment = round2(emi * months as f64);
    RepaymentSummary {
        emi,
        months,
        total_payment,
        total_interest: round2(total_payment - principal.max(0.0)),
    }
}

/// Refinance quote: installment and interest over the residual month count
/// of an existing loan taken over by another lender.
pub fn takeover_summary(
    remaining_principal: f64,
    annual_rate_pct: f64,
    remaining_months: u32,
) -> RepaymentSummary {
    if remaining_principal <= 0.0 || annual_rate_pct <= 0.0 || remaining_months == 0 {
        return RepaymentSummary {
            emi: 0.0,
            months: remaining_months,
            total_payment: 0.0,
            total_interest: 0.0,
        };
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let growth = (1.0 + monthly_rate).powf(remaining_months as f64);
    let emi = round2(remaining_principal * monthly_rate * growth / (growth - 1.0));
    let total_payment = round2(emi * remaining_months as f64);
    RepaymentSummary {
        emi,
        months: remaining_months,
        total_payment,
        total_interest: round2(total_payment - remaining_principal),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        assert_eq!(monthly_installment(0.0, 8.15, 5.0), 0.0);
        assert_eq!(monthly_installment(500000.0, 0.0, 5.0), 0.0);
        assert_eq!(monthly_installment(500000.0, 8.15, 0.0), 0.0);
        assert_eq!(monthly_installment(-1.0, 8.15, 5.0), 0.0);
    }

    #[test]
    fn test_reference_loan() {
        // 500k at 8.15% over 5 years: monthly rate 8.15/1200, 60 payments.
        assert_eq!(monthly_installment(500_000.0, 8.15, 5.0), 10_174.13);
    }

    #[test]
    fn test_summary_round_trip() {
        let s = repayment_summary(500_000.0, 8.15, 5);
        assert_eq!(s.months, 60);
        assert_eq!(s.total_payment, round2(s.emi * 60.0));
        assert_eq!(s.total_interest, round2(s.total_payment - 500_000.0));
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let cheap = monthly_installment(500_000.0, 8.15, 5.0);
        let dear = monthly_installment(500_000.0, 9.25, 5.0);
        assert!(dear > cheap);
    }

    #[test]
    fn test_takeover_matches_fresh_loan_at_same_terms() {
        let fresh = repayment_summary(300_000.0, 8.55, 3);
        let taken = takeover_summary(300_000.0, 8.55, 36);
        assert_eq!(fresh.emi, taken.emi);
        assert_eq!(fresh.total_interest, taken.total_interest);
    }

    #[test]
    fn test_takeover_degenerate_months() {
        let q = takeover_summary(300_000.0, 8.55, 0);
        assert_eq!(q.emi, 0.0);
        assert_eq!(q.total_payment, 0.0);
    }
}
