#[derive(thiserror::Error, Debug)]
pub enum AdvisoryZoneError {
    #[error("while reading advisory zones from {path}, {source}")]
    FileError {
        path: String,
        source: std::io::Error,
    },
    #[error("while parsing advisory zones from {path}, {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
}
