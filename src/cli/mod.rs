mod render;
mod shell;

pub use shell::{Shell, ShellCommand};

use anyhow::Result;
use clap::Parser;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use crate::application::{Session, SessionConfig};
use crate::domain::format_cents;
use crate::io::DEFAULT_FILE_NAME;

/// Personal Expense Tracker
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Record expenses for one session, review totals and export them to Excel")]
#[command(version)]
pub struct Cli {
    /// Where `export` saves the spreadsheet when no path is given
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,

    /// Currency symbol shown next to totals
    #[arg(short, long, default_value = "₹")]
    pub currency: String,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            currency_symbol: self.currency.clone(),
            ..SessionConfig::default()
        }
    }

    /// Run one interactive session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let session = Session::new(self.session_config());
        let shell = Shell::new(stdin().lock(), stdout().lock(), self.output.clone());

        let session = shell.run(session)?;
        let summary = session.end();
        if summary.record_count > 0 {
            println!(
                "Session ended with {} expense(s), total {} {}",
                summary.record_count,
                self.currency,
                format_cents(summary.total)
            );
        }
        Ok(())
    }
}
