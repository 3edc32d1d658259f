use std::sync::Arc;

pub mod cache;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod generation;
pub mod middleware;
pub mod result;
pub mod session;
pub mod utils;

pub mod routes;

pub use cache::ApiCache;
pub use client::{ApiClient, RequestBody};
pub use config::Config;
pub use error::{ClientError, ErrorKind, Result};
pub use generation::{Applied, LatestSlot, RequestGeneration, Ticket};
pub use result::{Ack, ApiEnvelope};
pub use session::{Session, UserData};

/// Builds a client whose session is restored from `config.session_file`.
pub async fn connect(config: Config) -> Result<ApiClient> {
    let session = Arc::new(Session::load(&config.session_file).await);
    ApiClient::with_session(config, session)
}
