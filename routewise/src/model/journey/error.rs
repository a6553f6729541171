#[derive(thiserror::Error, Debug)]
pub enum HubStoreError {
    #[error("while reading transport hubs from {path}, {source}")]
    FileError {
        path: String,
        source: std::io::Error,
    },
    #[error("while parsing transport hubs from {path}, {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
}
