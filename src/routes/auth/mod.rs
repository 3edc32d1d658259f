mod handler;
mod model;

pub use model::{LoginData, LoginRequest};
