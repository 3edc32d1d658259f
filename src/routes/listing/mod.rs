mod handler;
mod model;

pub use model::{Listing, ListingPage};
