pub mod builtin;
pub mod schema;

use std::path::Path;

use crate::error::FinbridgeError;
use schema::LenderRule;

/// Load a lender table from a CSV file.
pub fn load_lenders(path: &Path) -> Result<Vec<LenderRule>, FinbridgeError> {
    let content = std::fs::read_to_string(path).map_err(|e| FinbridgeError::LenderTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_lenders(&content).map_err(|e| FinbridgeError::LenderTableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a lender table from CSV text (header row required).
pub fn parse_lenders(csv_text: &str) -> Result<Vec<LenderRule>, FinbridgeError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut lenders = Vec::new();
    for row in reader.deserialize() {
        let lender: LenderRule = row?;
        lenders.push(lender);
    }
    validate_lenders(&lenders)?;
    Ok(lenders)
}

/// Validate that a lender table is well-formed.
pub fn validate_lenders(lenders: &[LenderRule]) -> Result<(), FinbridgeError> {
    if lenders.is_empty() {
        return Err(FinbridgeError::LenderTableInvalid(
            "lender table must not be empty".into(),
        ));
    }

    let mut seen_ids = std::collections::HashSet::new();
    for lender in lenders {
        if lender.bank_name.trim().is_empty() {
            return Err(FinbridgeError::LenderTableInvalid(format!(
                "lender {} has an empty name",
                lender.bank_id
            )));
        }

        if !seen_ids.insert(lender.bank_id) {
            return Err(FinbridgeError::LenderTableInvalid(format!(
                "duplicate bank_id {}",
                lender.bank_id
            )));
        }

        if lender.min_gpa < rust_decimal::Decimal::ZERO
            || lender.min_gpa > rust_decimal::Decimal::TEN
        {
            return Err(FinbridgeError::LenderTableInvalid(format!(
                "'{}' has min_gpa {} outside 0-10",
                lender.bank_name, lender.min_gpa
            )));
        }

        if lender.max_income <= rust_decimal::Decimal::ZERO {
            return Err(FinbridgeError::LenderTableInvalid(format!(
                "'{}' has non-positive max_income",
                lender.bank_name
            )));
        }

        if lender.approval_rate > 100 {
            return Err(FinbridgeError::LenderTableInvalid(format!(
                "'{}' has approval_rate above 100",
                lender.bank_name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_table() {
        let csv_text = "\
bank_id,bank_name,min_gpa,max_income,base_interest_rate,max_loan_amount,approval_rate,description
1,Test Bank,7.5,600000,8.5,1000000,95,Education loans
2,Other Bank,8.0,500000,9.0,750000,90,More loans
";
        let lenders = parse_lenders(csv_text).unwrap();
        assert_eq!(lenders.len(), 2);
        assert_eq!(lenders[0].bank_name, "Test Bank");
        assert_eq!(lenders[1].bank_id, 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        let csv_text =
            "bank_id,bank_name,min_gpa,max_income,base_interest_rate,max_loan_amount,approval_rate,description\n";
        assert!(parse_lenders(csv_text).is_err());
    }

    #[test]
    fn test_duplicate_bank_id_rejected() {
        let csv_text = "\
bank_id,bank_name,min_gpa,max_income,base_interest_rate,max_loan_amount,approval_rate,description
1,Test Bank,7.5,600000,8.5,1000000,95,x
1,Other Bank,8.0,500000,9.0,750000,90,y
";
        assert!(parse_lenders(csv_text).is_err());
    }

    #[test]
    fn test_gpa_out_of_range_rejected() {
        let csv_text = "\
bank_id,bank_name,min_gpa,max_income,base_interest_rate,max_loan_amount,approval_rate,description
1,Test Bank,11,600000,8.5,1000000,95,x
";
        assert!(parse_lenders(csv_text).is_err());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_lenders(Path::new("/nonexistent/lenders.csv")).unwrap_err();
        assert!(matches!(err, FinbridgeError::LenderTableLoad { .. }));
    }
}
