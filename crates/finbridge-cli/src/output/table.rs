use finbridge_core::lenders::schema::LenderRule;
use finbridge_core::model::{ApplicationRecord, DocumentRecord, ExtractedFields};
use finbridge_core::rank::RankedLender;
use finbridge_core::repay::RepaymentSummary;

pub fn print_fields(fields: &ExtractedFields) {
    let rows: [(&str, Option<String>); 9] = [
        ("Name", fields.name.clone()),
        ("Date of Birth", fields.dob.clone()),
        ("Course", fields.course.clone()),
        ("College", fields.college.clone()),
        ("USN", fields.usn.clone()),
        ("GPA / CGPA", fields.gpa.map(|v| v.to_string())),
        ("Income", fields.income.map(|v| v.to_string())),
        ("Admission Year", fields.admission_year.map(|v| v.to_string())),
        ("Loan Amount", fields.loan_amount.map(|v| v.to_string())),
    ];

    for (label, value) in rows {
        println!("  {:<15} {}", label, value.as_deref().unwrap_or("-"));
    }
}

pub fn print_document(record: &DocumentRecord) {
    println!(
        "Recorded document {} for {} ({} file(s))\n",
        record.doc_id,
        record.email,
        record.source_files.len()
    );
    print_fields(&record.fields);
}

pub fn print_ranked(ranked: &[RankedLender]) {
    for (i, lender) in ranked.iter().enumerate() {
        println!("{}. {} ({} / 100)", i + 1, lender.bank_name, lender.score);
        println!(
            "   Interest {}% p.a. | Max amount {} | Approval {}%",
            lender.interest, lender.max_amount, lender.approval
        );
        println!("   {}", lender.why);
    }
}

pub fn print_summary(summary: &RepaymentSummary) {
    println!("  Monthly EMI:    {:.2}", summary.emi);
    println!("  Months:         {}", summary.months);
    println!("  Total payment:  {:.2}", summary.total_payment);
    println!("  Total interest: {:.2}", summary.total_interest);
}

pub fn print_applications(applications: &[ApplicationRecord]) {
    if applications.is_empty() {
        println!("No applications found.");
        return;
    }
    for app in applications {
        println!(
            "  #{:<4} bank {:<3} {:<9} {}",
            app.app_id,
            app.bank_id,
            app.status.to_string(),
            app.timestamp
        );
    }
}

pub fn print_lenders(lenders: &[LenderRule]) {
    for lender in lenders {
        println!(
            "  {:<3} {:<22} min GPA {:<5} max income {:<9} rate {}%",
            lender.bank_id, lender.bank_name, lender.min_gpa, lender.max_income,
            lender.base_interest_rate
        );
    }
}
