use rust_decimal::Decimal;

use crate::extract::amount::parse_amount;
use crate::lenders::schema::LenderRule;
use crate::model::BorrowerProfile;
use crate::rank::outcome::RankedLender;

const GPA_POINTS: i32 = 40;
const INCOME_POINTS: i32 = 30;
const BASELINE_POINTS: i32 = 30;
const RATE_BONUS: i32 = 5;
const GOOD_FIT_THRESHOLD: i32 = 75;

const GOOD_FIT: &str = "Good fit — meets most criteria.";
const PARTIAL_FIT: &str = "Partial fit.";

/// Rank lenders against a borrower profile, best fit first.
///
/// Pure function of its inputs: no I/O, no randomness. The sort is stable,
/// so lenders with equal scores keep their table order.
pub fn rank(profile: &BorrowerProfile, lenders: &[LenderRule]) -> Vec<RankedLender> {
    let mut ranked: Vec<RankedLender> = lenders
        .iter()
        .map(|lender| score_lender(profile, lender))
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Score a single lender.
///
/// Missing and unparseable profile values are scored as failed checks with
/// their own reason strings; they never abort the ranking.
fn score_lender(profile: &BorrowerProfile, lender: &LenderRule) -> RankedLender {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    match profile.gpa.as_deref() {
        None => reasons.push("GPA missing".into()),
        Some(raw) => match parse_amount(raw) {
            None => reasons.push("GPA parse error".into()),
            Some(gpa) if gpa >= lender.min_gpa => score += GPA_POINTS,
            Some(gpa) => reasons.push(format!("GPA {} below min {}", gpa, lender.min_gpa)),
        },
    }

    match profile.income.as_deref() {
        None => reasons.push("Income missing".into()),
        Some(raw) => match parse_amount(raw) {
            None => reasons.push("Income parse error".into()),
            Some(income) if income <= lender.max_income => score += INCOME_POINTS,
            Some(income) => {
                reasons.push(format!("Income {} > max {}", income, lender.max_income))
            }
        },
    }

    score += BASELINE_POINTS;

    // Rate nudge: reward cheap money, penalize expensive money, leave the
    // middle band untouched.
    if lender.base_interest_rate <= Decimal::new(105, 1) {
        score += RATE_BONUS;
    } else if lender.base_interest_rate > Decimal::from(12) {
        score -= RATE_BONUS;
    }

    let score = score.clamp(0, 100);
    let why = if score >= GOOD_FIT_THRESHOLD {
        GOOD_FIT.to_string()
    } else if reasons.is_empty() {
        PARTIAL_FIT.to_string()
    } else {
        reasons.join("; ")
    };

    RankedLender {
        bank_id: lender.bank_id,
        bank_name: lender.bank_name.clone(),
        score,
        why,
        interest: lender.base_interest_rate,
        max_amount: lender.max_loan_amount,
        approval: lender.approval_rate,
        description: lender.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lender(id: u64, name: &str, min_gpa: Decimal, max_income: Decimal, rate: Decimal) -> LenderRule {
        LenderRule {
            bank_id: id,
            bank_name: name.into(),
            min_gpa,
            max_income,
            base_interest_rate: rate,
            max_loan_amount: 1_000_000,
            approval_rate: 90,
            description: "Education loans".into(),
        }
    }

    fn profile(gpa: &str, income: &str) -> BorrowerProfile {
        BorrowerProfile::new(Some(gpa.into()), Some(income.into()))
    }

    #[test]
    fn test_strong_profile_scores_full_marks() {
        // 40 + 30 + 30 + 5 = 105, clamped to 100.
        let ranked = rank(
            &profile("9.2", "300000"),
            &[lender(1, "SBI", dec!(8.0), dec!(500000), dec!(8.15))],
        );
        assert_eq!(ranked[0].score, 100);
        assert_eq!(ranked[0].why, GOOD_FIT);
    }

    #[test]
    fn test_gpa_component_awarded_iff_at_least_min() {
        let l = [lender(1, "SBI", dec!(8.0), dec!(500000), dec!(11))];
        assert_eq!(rank(&profile("8.0", "300000"), &l)[0].score, 100);

        let low = rank(&profile("7.9", "300000"), &l);
        assert_eq!(low[0].score, 60);
        assert_eq!(low[0].why, "GPA 7.9 below min 8.0");
    }

    #[test]
    fn test_income_component_awarded_iff_at_most_max() {
        let l = [lender(1, "SBI", dec!(8.0), dec!(500000), dec!(11))];
        let high = rank(&profile("9.0", "500001"), &l);
        assert_eq!(high[0].score, 70);
        assert_eq!(high[0].why, "Income 500001 > max 500000");
    }

    #[test]
    fn test_missing_values_recorded_not_scored() {
        let ranked = rank(
            &BorrowerProfile::default(),
            &[lender(1, "SBI", dec!(8.0), dec!(500000), dec!(11))],
        );
        assert_eq!(ranked[0].score, 30);
        assert_eq!(ranked[0].why, "GPA missing; Income missing");
    }

    #[test]
    fn test_unparseable_values_recorded_not_scored() {
        let ranked = rank(
            &profile("nine point two", "lots"),
            &[lender(1, "SBI", dec!(8.0), dec!(500000), dec!(11))],
        );
        assert_eq!(ranked[0].score, 30);
        assert_eq!(ranked[0].why, "GPA parse error; Income parse error");
    }

    #[test]
    fn test_currency_marked_income_still_parses() {
        let ranked = rank(
            &profile("9.2", "₹ 3,00,000"),
            &[lender(1, "SBI", dec!(8.0), dec!(500000), dec!(8.15))],
        );
        assert_eq!(ranked[0].score, 100);
    }

    #[test]
    fn test_expensive_rate_penalized() {
        // 40 + 30 + 30 - 5 = 95; still a good fit by threshold.
        let ranked = rank(
            &profile("9.0", "300000"),
            &[lender(1, "Costly", dec!(8.0), dec!(500000), dec!(12.5))],
        );
        assert_eq!(ranked[0].score, 95);
    }

    #[test]
    fn test_middle_rate_band_untouched() {
        let ranked = rank(
            &profile("9.0", "300000"),
            &[lender(1, "Mid", dec!(8.0), dec!(500000), dec!(11))],
        );
        assert_eq!(ranked[0].score, 100);
    }

    #[test]
    fn test_threshold_boundary_is_good_fit() {
        // GPA passes, income fails: 40 + 30 + 5 = 75 exactly. The fixed
        // good-fit message wins over the recorded reason.
        let ranked = rank(
            &profile("9.0", "900000"),
            &[lender(1, "SBI", dec!(8.0), dec!(500000), dec!(8.15))],
        );
        assert_eq!(ranked[0].score, 75);
        assert_eq!(ranked[0].why, GOOD_FIT);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let lenders = [
            lender(1, "Low", dec!(9.9), dec!(500000), dec!(11)),
            lender(2, "TieA", dec!(8.0), dec!(500000), dec!(11)),
            lender(3, "TieB", dec!(8.0), dec!(500000), dec!(11)),
        ];
        let ranked = rank(&profile("9.0", "300000"), &lenders);
        assert_eq!(ranked[0].bank_id, 2);
        assert_eq!(ranked[1].bank_id, 3);
        assert_eq!(ranked[2].bank_id, 1);
        assert!(ranked[0].score >= ranked[1].score && ranked[1].score >= ranked[2].score);
    }

    #[test]
    fn test_lender_terms_passed_through() {
        let ranked = rank(
            &profile("9.2", "300000"),
            &[lender(7, "ICICI", dec!(8.5), dec!(1100000), dec!(9.00))],
        );
        assert_eq!(ranked[0].bank_id, 7);
        assert_eq!(ranked[0].interest, dec!(9.00));
        assert_eq!(ranked[0].max_amount, 1_000_000);
        assert_eq!(ranked[0].approval, 90);
    }
}
