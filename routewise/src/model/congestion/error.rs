#[derive(thiserror::Error, Debug)]
pub enum CongestionPatternError {
    #[error("while reading congestion patterns from {path}, {source}")]
    CsvError { path: String, source: csv::Error },
}
