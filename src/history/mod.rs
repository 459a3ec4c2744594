//! History: previously generated audio, its metadata and downloads.

mod client;
mod types;

pub use client::HistoryService;
pub use types::{Alignments, DownloadRequest, Feedback, HistoryItem, ListHistoryResponse, ListOptions};
