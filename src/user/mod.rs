//! User: account details and subscription usage.

mod client;
mod types;

pub use client::UserService;
pub use types::{NextInvoice, Subscription, User};
