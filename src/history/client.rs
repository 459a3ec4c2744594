//! History service.

use super::types::{DownloadRequest, HistoryItem, ListHistoryResponse, ListOptions};
use crate::transport::query::params;
use crate::transport::{build_url, ApiRequest, AudioStream, RequestContext, Transport, TransportExt};
use crate::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct HistoryService {
    transport: Arc<dyn Transport>,
}

impl HistoryService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        options: Option<&ListOptions>,
    ) -> Result<ListHistoryResponse> {
        let mut path = String::from("/v1/history");
        if let Some(options) = options {
            let query = params([
                ("page_size", options.page_size.map(|n| n.to_string())),
                ("voice_id", options.voice_id.clone()),
            ]);
            path = build_url(&path, &query);
        }
        self.transport.invoke(ctx, ApiRequest::get(path)).await
    }

    pub async fn get(&self, ctx: &RequestContext, history_item_id: &str) -> Result<HistoryItem> {
        let path = format!("/v1/history/{}", history_item_id);
        self.transport.invoke(ctx, ApiRequest::get(path)).await
    }

    pub async fn delete(&self, ctx: &RequestContext, history_item_id: &str) -> Result<()> {
        let path = format!("/v1/history/{}", history_item_id);
        self.transport.invoke_unit(ctx, ApiRequest::delete(path)).await
    }

    /// Audio of a single item.
    pub async fn get_audio(&self, ctx: &RequestContext, history_item_id: &str) -> Result<AudioStream> {
        let path = format!("/v1/history/{}/audio", history_item_id);
        self.transport.execute_stream(ctx, ApiRequest::get(path)).await
    }

    /// Download items: one id yields the audio file, several yield a ZIP archive.
    pub async fn download<S: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        history_item_ids: &[S],
    ) -> Result<AudioStream> {
        let body = DownloadRequest {
            history_item_ids: history_item_ids
                .iter()
                .map(|id| id.as_ref().to_string())
                .collect(),
        };
        let request = ApiRequest::post("/v1/history/download").json(&body)?;
        self.transport.execute_stream(ctx, request).await
    }
}
