use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::{EntryForm, Session, Submission};
use crate::domain::{CategoryChoice, format_cents, parse_cents};
use crate::io::Exporter;

use super::render;

const HELP: &str = "\
Commands:
  add                  Add a new expense
  list                 Show all expenses
  summary              Show the total and per-category breakdown
  export [path]        Save the expenses as an Excel file
  export-csv [path]    Write the expenses as CSV (stdout if no path)
  export-json [path]   Write the expenses as JSON (stdout if no path)
  help                 Show this message
  quit                 End the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    List,
    Summary,
    Export(Option<PathBuf>),
    ExportCsv(Option<PathBuf>),
    ExportJson(Option<PathBuf>),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let path = (!rest.is_empty()).then(|| PathBuf::from(rest));

        match name.to_lowercase().as_str() {
            "add" => Ok(ShellCommand::Add),
            "list" | "ls" => Ok(ShellCommand::List),
            "summary" => Ok(ShellCommand::Summary),
            "export" => Ok(ShellCommand::Export(path)),
            "export-csv" => Ok(ShellCommand::ExportCsv(path)),
            "export-json" => Ok(ShellCommand::ExportJson(path)),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(name.to_string()),
        }
    }
}

/// Result of reading the entry form, before validation.
enum FormInput {
    Filled(EntryForm),
    Invalid(String),
    Closed,
}

/// Line-oriented front end for one session.
///
/// Every handler takes the session by value and hands it back, so the
/// session state is only ever reachable through the value being threaded.
pub struct Shell<R, W> {
    input: R,
    output: W,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, export_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            export_path: export_path.into(),
        }
    }

    /// Run commands until `quit` or end of input, then return the session.
    pub fn run(mut self, mut session: Session) -> Result<Session> {
        writeln!(self.output, "Personal Expense Tracker")?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(unknown) => {
                    writeln!(
                        self.output,
                        "Unknown command '{}'. Type 'help' for a list of commands.",
                        unknown
                    )?;
                    continue;
                }
            };

            session = match command {
                ShellCommand::Add => self.add(session)?,
                ShellCommand::List => self.list(session)?,
                ShellCommand::Summary => self.summary(session)?,
                ShellCommand::Export(path) => self.export_xlsx(session, path)?,
                ShellCommand::ExportCsv(path) => self.export_text(session, path, false)?,
                ShellCommand::ExportJson(path) => self.export_text(session, path, true)?,
                ShellCommand::Help => {
                    writeln!(self.output, "{}", HELP)?;
                    session
                }
                ShellCommand::Quit => break,
            };
        }

        self.output.flush()?;
        Ok(session)
    }

    fn add(&mut self, mut session: Session) -> Result<Session> {
        writeln!(self.output, "Add a new expense")?;
        let form = match self.read_form(session.blank_form())? {
            FormInput::Filled(form) => form,
            FormInput::Invalid(message) => {
                writeln!(self.output, "Warning: {}", message)?;
                return Ok(session);
            }
            FormInput::Closed => return Ok(session),
        };

        match session.submit(form) {
            Submission::Added(_) => writeln!(self.output, "Expense added!")?,
            Submission::Rejected(warnings) => {
                for warning in warnings {
                    writeln!(self.output, "Warning: {}", warning)?;
                }
            }
        }
        Ok(session)
    }

    fn list(&mut self, session: Session) -> Result<Session> {
        let view = session.view();
        if view.records.is_empty() {
            writeln!(self.output, "No expenses recorded yet.")?;
        } else {
            write!(self.output, "{}", render::expense_table(view.records))?;
        }
        Ok(session)
    }

    fn summary(&mut self, session: Session) -> Result<Session> {
        let view = session.view();
        if view.records.is_empty() {
            writeln!(self.output, "No expenses recorded yet.")?;
        } else {
            write!(
                self.output,
                "{}",
                render::summary(&view.summary, &session.config().currency_symbol)
            )?;
        }
        Ok(session)
    }

    /// Export failures are reported inline; the session carries on.
    fn export_xlsx(&mut self, mut session: Session, path: Option<PathBuf>) -> Result<Session> {
        if let Err(e) = self.save_xlsx(&mut session, path) {
            tracing::warn!(error = %e, "export failed");
            writeln!(self.output, "Warning: {:#}", e)?;
        }
        Ok(session)
    }

    fn save_xlsx(&mut self, session: &mut Session, path: Option<PathBuf>) -> Result<()> {
        let Some(artifact) = session.export()? else {
            writeln!(self.output, "Nothing to export yet. Add an expense first.")?;
            return Ok(());
        };

        let path = path.unwrap_or_else(|| self.export_path.clone());
        std::fs::write(&path, &artifact.bytes)
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;
        tracing::info!(path = %path.display(), "export saved");

        writeln!(
            self.output,
            "Saved {} ({}, {} bytes) to {}",
            artifact.file_name,
            artifact.media_type,
            artifact.bytes.len(),
            path.display()
        )?;
        Ok(())
    }

    fn export_text(&mut self, session: Session, path: Option<PathBuf>, json: bool) -> Result<Session> {
        if let Err(e) = self.write_text(&session, path, json) {
            tracing::warn!(error = %e, "export failed");
            writeln!(self.output, "Warning: {:#}", e)?;
        }
        Ok(session)
    }

    fn write_text(&mut self, session: &Session, path: Option<PathBuf>, json: bool) -> Result<()> {
        if session.ledger().is_empty() {
            writeln!(self.output, "Nothing to export yet. Add an expense first.")?;
            return Ok(());
        }

        let exporter = Exporter::new(session.ledger().records());
        match path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let count = if json {
                    exporter.export_json(file)?
                } else {
                    exporter.export_csv(file)?
                };
                writeln!(self.output, "Exported {} expenses to {}", count, path.display())?;
            }
            None => {
                if json {
                    exporter.export_json(&mut self.output)?;
                } else {
                    exporter.export_csv(&mut self.output)?;
                }
            }
        }
        Ok(())
    }

    fn read_form(&mut self, blank: EntryForm) -> Result<FormInput> {
        let Some(date) = self.prompt(&format!("Date [{}]: ", blank.date.format("%Y-%m-%d")))?
        else {
            return Ok(FormInput::Closed);
        };
        let date = match date.trim() {
            "" => blank.date,
            text => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    return Ok(FormInput::Invalid(format!(
                        "Invalid date '{}'. Use YYYY-MM-DD.",
                        text
                    )));
                }
            },
        };

        let options: Vec<&str> = CategoryChoice::options().map(|c| c.as_str()).collect();
        let Some(category) = self.prompt(&format!(
            "Category ({}) [{}]: ",
            options.join("/"),
            blank.category
        ))?
        else {
            return Ok(FormInput::Closed);
        };
        let category = match category.parse::<CategoryChoice>() {
            Ok(choice) => choice,
            Err(e) => return Ok(FormInput::Invalid(format!("{}.", e))),
        };

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(FormInput::Closed);
        };

        let Some(amount) =
            self.prompt(&format!("Amount [{}]: ", format_cents(blank.amount_cents)))?
        else {
            return Ok(FormInput::Closed);
        };
        let amount_cents = match parse_cents(&amount) {
            Ok(cents) => cents,
            Err(e) => {
                return Ok(FormInput::Invalid(format!(
                    "Invalid amount '{}': {}.",
                    amount.trim(),
                    e
                )));
            }
        };

        Ok(FormInput::Filled(EntryForm {
            date,
            category,
            description,
            amount_cents,
        }))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?
            == 0
        {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
