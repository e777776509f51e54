use bytebank::application::session::Session;
use bytebank::domain::registry::AccountRegistry;
use bytebank::interfaces::csv::operation_reader::OperationReader;
use bytebank::interfaces::csv::statement_writer::StatementWriter;
use bytebank::interfaces::humanize::{due_notice, parse_due_date, parse_instant};
use chrono::Utc;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print how long ago (or until when) a payment was due
    DueDate {
        /// Due date, YYYY-MM-DD
        #[arg(long, default_value = "2022-07-17")]
        due: String,

        /// Reference instant in RFC 3339 format. Defaults to now.
        #[arg(long)]
        now: Option<String>,

        /// Wait for ENTER before exiting
        #[arg(long)]
        pause: bool,
    },
    /// Apply a CSV of operations to a source account and print the statement
    Replay {
        /// Input operations CSV file (`type, amount`)
        input: PathBuf,

        #[arg(long, default_value_t = 1)]
        branch: i32,

        #[arg(long, default_value_t = 100)]
        number: i32,

        /// Branch of the account receiving transfers
        #[arg(long, default_value_t = 1)]
        dest_branch: i32,

        /// Number of the account receiving transfers
        #[arg(long, default_value_t = 200)]
        dest_number: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::DueDate { due, now, pause } => {
            let due = parse_due_date(&due).into_diagnostic()?;
            let now = match now {
                Some(now) => parse_instant(&now).into_diagnostic()?,
                None => Utc::now(),
            };

            println!("{}", due_notice(due, now));

            if pause {
                println!("Press ENTER to exit");
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line).into_diagnostic()?;
            }
        }
        Command::Replay {
            input,
            branch,
            number,
            dest_branch,
            dest_number,
        } => {
            let registry = AccountRegistry::new();
            let mut session = Session::open(registry, (branch, number), (dest_branch, dest_number))
                .into_diagnostic()?;

            let file = File::open(input).into_diagnostic()?;
            let reader = OperationReader::new(file);
            for op_result in reader.operations() {
                match op_result {
                    Ok(op) => {
                        if let Err(e) = session.apply(op) {
                            eprintln!("Error processing operation: {}", e);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error reading operation: {}", e);
                    }
                }
            }

            info!(
                total_created = session.registry().total_created(),
                operation_fee = %session.registry().operation_fee(),
                "replay finished"
            );

            let stdout = io::stdout();
            let mut writer = StatementWriter::new(stdout.lock());
            writer
                .write_accounts([session.source(), session.destination()])
                .into_diagnostic()?;
        }
    }

    Ok(())
}
