use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error("CSV has no data rows; expected columns: date,production")]
    EmptyDataset,
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}
