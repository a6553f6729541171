pub mod advisory;
pub mod congestion;
pub mod failure;
pub mod journey;
pub mod persona;
pub mod rci;
