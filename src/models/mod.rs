//! Models: the synthesis models available to the account.

mod client;
mod types;

pub use client::ModelsService;
pub use types::{Language, ListModelsResponse, Model};
