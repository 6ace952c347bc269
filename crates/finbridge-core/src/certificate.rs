use chrono::Utc;

/// No-objection certificate for transferring a loan to another lender,
/// dated today. Fixed-layout plain text, ready for download.
pub fn no_objection_certificate(bank_name: &str, app_id: u64) -> String {
    no_objection_certificate_dated(bank_name, app_id, &Utc::now().format("%d-%m-%Y").to_string())
}

/// Same certificate with an explicit issue date (`DD-MM-YYYY`).
pub fn no_objection_certificate_dated(bank_name: &str, app_id: u64, date: &str) -> String {
    format!(
        "Date: {date}\n\
         \n\
         To Whom It May Concern,\n\
         \n\
         This is to certify that {bank_name} has no objection to the\n\
         transfer of the existing loan (Application ID: {app_id})\n\
         to another financial institution as per the borrower's request.\n\
         \n\
         We confirm that all dues up to this date are settled,\n\
         and we issue this No Objection Certificate accordingly.\n\
         \n\
         Sincerely,\n\
         {bank_name} - Loan Department\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_names_bank_and_application() {
        let text = no_objection_certificate_dated("State Bank of India", 12, "01-02-2026");
        assert!(text.starts_with("Date: 01-02-2026\n"));
        assert!(text.contains("State Bank of India has no objection"));
        assert!(text.contains("(Application ID: 12)"));
        assert!(text.ends_with("State Bank of India - Loan Department\n"));
    }

    #[test]
    fn test_dated_today_by_default() {
        let text = no_objection_certificate("HDFC Bank", 1);
        let today = Utc::now().format("%d-%m-%Y").to_string();
        assert!(text.contains(&today));
    }
}
