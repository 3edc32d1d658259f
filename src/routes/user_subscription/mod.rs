mod handler;
mod model;

pub use model::{UserSubscription, UserSubscriptionPage, UserSubscriptionParams};
