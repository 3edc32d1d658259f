mod handler;
mod model;

pub use model::{PropertyRequest, PropertyRequestFilter, PropertyRequestStats};
