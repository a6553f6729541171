use crate::model::advisory::AdvisoryZoneError;
use crate::model::congestion::CongestionPatternError;
use crate::model::failure::FailureHistoryError;
use crate::model::journey::HubStoreError;

#[derive(thiserror::Error, Debug)]
pub enum RankAppError {
    #[error("while reading app configuration from {path}, {message}")]
    ConfigError { path: String, message: String },
    #[error("while reading query file {path}, {message}")]
    QueryError { path: String, message: String },
    #[error(transparent)]
    AdvisoryZones(#[from] AdvisoryZoneError),
    #[error(transparent)]
    FailureHistory(#[from] FailureHistoryError),
    #[error(transparent)]
    CongestionPatterns(#[from] CongestionPatternError),
    #[error(transparent)]
    TransportHubs(#[from] HubStoreError),
}
