mod handler;
mod model;

pub use model::{PlanList, SubscriptionPlan};
