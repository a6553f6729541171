#[derive(thiserror::Error, Debug)]
pub enum FailureHistoryError {
    #[error("while reading failure history rows from {path}, {source}")]
    CsvError { path: String, source: csv::Error },
}
