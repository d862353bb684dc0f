use chrono::{Local, NaiveDate};

use crate::domain::{Cents, ExpenseRecord, Ledger};
use crate::io::{DEFAULT_FILE_NAME, Exporter, XLSX_MEDIA_TYPE};

use super::{AppError, EntryForm, Summary, ValidationWarning};

/// Per-session settings, fixed at session start.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Default value of the form's date field.
    pub today: NaiveDate,
    pub currency_symbol: String,
    pub export_file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
            currency_symbol: "₹".to_string(),
            export_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Outcome of submitting the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(ExpenseRecord),
    Rejected(Vec<ValidationWarning>),
}

impl Submission {
    pub fn is_added(&self) -> bool {
        matches!(self, Submission::Added(_))
    }
}

/// Everything the display surface renders after an interaction.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub records: &'a [ExpenseRecord],
    pub total: Cents,
    pub summary: Summary,
    pub export_offered: bool,
}

/// A downloadable spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
struct CachedExport {
    record_count: usize,
    bytes: Vec<u8>,
}

/// State owned by one user session: the ledger plus the last export.
///
/// Created at session start and handed to each shell handler, which
/// returns it for the next interaction. `end` consumes it.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    ledger: Ledger,
    cached_export: Option<CachedExport>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        tracing::debug!(today = %config.today, "session started");
        Self {
            config,
            ledger: Ledger::new(),
            cached_export: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// A fresh form with the session's defaults.
    pub fn blank_form(&self) -> EntryForm {
        EntryForm::blank(self.config.today)
    }

    /// Validate the form and append it when every check passes.
    pub fn submit(&mut self, form: EntryForm) -> Submission {
        match form.validate() {
            Ok(record) => {
                tracing::info!(
                    category = %record.category,
                    amount_cents = record.amount_cents,
                    "expense added"
                );
                self.ledger.append(record.clone());
                Submission::Added(record)
            }
            Err(warnings) => {
                tracing::debug!(?warnings, "entry rejected");
                Submission::Rejected(warnings)
            }
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            records: self.ledger.records(),
            total: self.ledger.total(),
            summary: Summary::from_ledger(&self.ledger),
            export_offered: !self.ledger.is_empty(),
        }
    }

    /// Build the spreadsheet download, or `None` when the ledger is empty.
    ///
    /// The ledger only grows, so the record count identifies the snapshot
    /// a cached workbook was built from.
    pub fn export(&mut self) -> Result<Option<ExportArtifact>, AppError> {
        if self.ledger.is_empty() {
            return Ok(None);
        }

        let record_count = self.ledger.len();
        let bytes = match &self.cached_export {
            Some(cached) if cached.record_count == record_count => {
                tracing::debug!(record_count, "reusing cached export");
                cached.bytes.clone()
            }
            _ => {
                let bytes = Exporter::new(self.ledger.records()).to_xlsx()?;
                tracing::info!(record_count, size = bytes.len(), "export built");
                self.cached_export = Some(CachedExport {
                    record_count,
                    bytes: bytes.clone(),
                });
                bytes
            }
        };

        Ok(Some(ExportArtifact {
            file_name: self.config.export_file_name.clone(),
            media_type: XLSX_MEDIA_TYPE,
            bytes,
        }))
    }

    /// Tear the session down, returning the final aggregates.
    pub fn end(self) -> Summary {
        tracing::debug!(records = self.ledger.len(), "session ended");
        Summary::from_ledger(&self.ledger)
    }
}
