//! Models service.

use super::types::{ListModelsResponse, Model};
use crate::transport::{ApiRequest, RequestContext, Transport, TransportExt};
use crate::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct ModelsService {
    transport: Arc<dyn Transport>,
}

impl ModelsService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List all models.
    pub async fn list(&self, ctx: &RequestContext) -> Result<ListModelsResponse> {
        // `/v1/models` answers with a bare JSON array while every other endpoint wraps
        // its payload in an object. That is the upstream API's choice; wrap it here so
        // callers get the same shape as everywhere else.
        let models: Vec<Model> = self
            .transport
            .invoke(ctx, ApiRequest::get("/v1/models"))
            .await?;
        Ok(ListModelsResponse { models })
    }
}
