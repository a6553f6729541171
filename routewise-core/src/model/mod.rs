mod confidence;
mod coordinate;
mod leg;
mod mode;
mod persona;
mod route;
mod time_window;

pub use confidence::{ConfidenceResult, ConfidenceTier, RciComponents};
pub use coordinate::Coordinate;
pub use leg::RouteLeg;
pub use mode::{ModeClass, TransportMode};
pub use persona::Persona;
pub use route::RouteCandidate;
pub use time_window::TimeWindow;
