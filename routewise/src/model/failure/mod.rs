mod error;
mod record;
mod store;

pub use error::FailureHistoryError;
pub use record::FailureHistoryRecord;
pub use store::{route_signature, FailureHistoryStore};
