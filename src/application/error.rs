use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Export failed: {0}")]
    Export(#[from] anyhow::Error),
}
