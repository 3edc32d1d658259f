mod handler;
mod model;

pub use model::ActivityParams;
