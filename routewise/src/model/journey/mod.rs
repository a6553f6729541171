mod error;
mod hub;
mod hub_store;
pub mod leg_ops;
mod multimodal;
mod transit;

pub use error::HubStoreError;
pub use hub::{HubKind, TransportHub};
pub use hub_store::TransportHubStore;
pub use multimodal::MultimodalSynthesizer;
pub use transit::{TransitConfig, TransitSynthesizer};
