mod handler;
mod model;

pub use model::{KycPage, KycRequest};
