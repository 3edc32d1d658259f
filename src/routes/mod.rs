//! Typed endpoint groups. Each group adds its calls to [`ApiClient`](crate::ApiClient).

pub mod auth;
pub mod company_agent;
pub mod dashboard;
pub mod kyc;
pub mod listing;
pub mod property_request;
pub mod setting;
pub mod subscription;
pub mod user;
pub mod user_subscription;
