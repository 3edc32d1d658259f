mod handler;
mod model;

pub use model::{AdminUser, UserListParams, UserPage};
