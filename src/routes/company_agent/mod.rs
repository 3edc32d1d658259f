mod handler;
mod model;

pub use model::{AgentRequestStatus, CompanyAgentRequest};
