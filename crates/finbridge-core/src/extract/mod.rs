pub mod amount;

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::model::{DocumentExtraction, ExtractedFields};
use amount::parse_amount;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name[:\s]+([A-Z][A-Za-z .\-]{2,80})").unwrap());
static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Z][A-Za-z ]{2,80})\s*$").unwrap());
static GPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(GPA|CGPA)[:\s]*([0-9]{1,2}\.?[0-9]{0,2})").unwrap());
static INCOME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Income|Family Income|family_income)[:\s₹Rs.]*([0-9,]+)").unwrap()
});
static ADMISSION_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Admission\s*Year[:\s]*([0-9]{4})").unwrap());
static COURSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Course[:\s]*([A-Za-z0-9 \-&]+)").unwrap());
static COLLEGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)College[:\s]*([A-Za-z0-9 &.\-]+)").unwrap());
static USN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(USN|Roll No\.?)[:\s]*([A-Z0-9\-]+)").unwrap());
static DOB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(DOB|Date of Birth)[:\s]*([0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{2}/[0-9]{2}/[0-9]{4})")
        .unwrap()
});
static LOAN_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Loan[ _]?Amount[:\s₹Rs.]*([0-9,]+)").unwrap());

/// Extract structured fields from recognized text, keeping the raw text
/// alongside them.
pub fn extract_document(text: &str) -> DocumentExtraction {
    DocumentExtraction {
        fields: extract_fields(text),
        raw_text: text.to_string(),
    }
}

/// Run the independent field searches over the whole text.
///
/// Each field comes from its own pattern: a miss or an unparseable capture
/// leaves that one field `None` and touches nothing else. This is a set of
/// lookups, not a left-to-right parse.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let fields = ExtractedFields {
        name: extract_name(text),
        dob: capture(&DOB_RE, text, 2),
        college: capture(&COLLEGE_RE, text, 1),
        course: capture(&COURSE_RE, text, 1),
        gpa: capture(&GPA_RE, text, 2).and_then(|g| Decimal::from_str(&g).ok()),
        usn: capture(&USN_RE, text, 2),
        income: capture(&INCOME_RE, text, 2).and_then(|i| parse_amount(&i)),
        admission_year: capture(&ADMISSION_YEAR_RE, text, 1).and_then(|y| y.parse().ok()),
        loan_amount: capture(&LOAN_AMOUNT_RE, text, 1).and_then(|a| parse_amount(&a)),
    };
    tracing::debug!(
        name = fields.name.is_some(),
        gpa = fields.gpa.is_some(),
        income = fields.income.is_some(),
        "field extraction done"
    );
    fields
}

/// Labeled "Name:" search, falling back to a bare capitalized line.
fn extract_name(text: &str) -> Option<String> {
    if let Some(caps) = NAME_RE.captures(text) {
        return caps.get(1).map(|m| m.as_str().trim().to_string());
    }
    NAME_LINE_RE
        .captures(text)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
}

fn capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group).map(|m| m.as_str().trim().to_string()))
}
