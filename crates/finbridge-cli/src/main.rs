mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "finbridge",
    version,
    about = "Student-loan assistant: document OCR, lender ranking, repayment math"
)]
struct Cli {
    /// Directory holding the CSV stores
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize documents and show the extracted fields (nothing is stored)
    Scan {
        /// Document files (PDF or image)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Recognize documents and record the extraction for a user
    Ingest {
        /// Email of the uploading user
        #[arg(short, long)]
        email: String,

        /// Document files (PDF or image)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Rank lenders for a borrower profile
    Rank {
        /// Pull the profile from this user's latest ingested document
        #[arg(short, long)]
        email: Option<String>,

        /// Borrower GPA (overrides the document value)
        #[arg(long)]
        gpa: Option<String>,

        /// Borrower family income (overrides the document value)
        #[arg(long)]
        income: Option<String>,

        /// Custom lender table CSV (default: builtin table)
        #[arg(short, long, value_name = "FILE")]
        lenders: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Compute the repayment schedule for a loan
    Repay {
        /// Principal amount
        principal: f64,

        /// Annual interest rate, percent
        rate: f64,

        /// Tenure in years
        years: u32,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Submit a loan application
    Apply {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        bank_id: u64,

        /// Form fields as a JSON object
        #[arg(short, long, default_value = "{}")]
        form: String,
    },
    /// List a user's applications
    Applications {
        #[arg(short, long)]
        email: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Schedule a bank appointment for an application
    Schedule {
        #[arg(short, long)]
        app_id: u64,

        /// Appointment time (ISO-8601 or "YYYY-MM-DD HH:MM")
        #[arg(short, long)]
        when: String,
    },
    /// Register and log in accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Manage and inspect lender tables
    Lenders {
        #[command(subcommand)]
        action: LendersAction,
    },
    /// Print a no-objection certificate for a loan takeover
    Noc {
        /// Bank issuing the certificate
        #[arg(short, long)]
        bank: String,

        #[arg(short, long)]
        app_id: u64,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account
    Register {
        email: String,
        password: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Verify credentials and show the profile
    Login { email: String, password: String },
}

#[derive(Subcommand)]
enum LendersAction {
    /// List the lender table
    List {
        /// Custom lender table CSV (default: builtin table)
        #[arg(short, long, value_name = "FILE")]
        lenders: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Validate a custom lender table CSV
    Validate {
        /// Path to the CSV file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan { files, output } => commands::scan::run(files, &output),
        Commands::Ingest {
            email,
            files,
            output,
        } => commands::ingest::run(&cli.data_dir, &email, files, &output),
        Commands::Rank {
            email,
            gpa,
            income,
            lenders,
            output,
        } => commands::rank::run(&cli.data_dir, email, gpa, income, lenders, &output),
        Commands::Repay {
            principal,
            rate,
            years,
            output,
        } => commands::repay::run(principal, rate, years, &output),
        Commands::Apply {
            email,
            bank_id,
            form,
        } => commands::apply::run(&cli.data_dir, &email, bank_id, &form),
        Commands::Applications { email, output } => {
            commands::apply::list(&cli.data_dir, &email, &output)
        }
        Commands::Schedule { app_id, when } => {
            commands::schedule::run(&cli.data_dir, app_id, &when)
        }
        Commands::Account { action } => match action {
            AccountAction::Register {
                email,
                password,
                name,
                phone,
            } => commands::account::register(&cli.data_dir, &email, &password, &name, &phone),
            AccountAction::Login { email, password } => {
                commands::account::login(&cli.data_dir, &email, &password)
            }
        },
        Commands::Lenders { action } => match action {
            LendersAction::List { lenders, output } => commands::lenders::list(lenders, &output),
            LendersAction::Validate { file } => commands::lenders::validate(&file),
        },
        Commands::Noc { bank, app_id } => commands::certificate::run(&bank, app_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
