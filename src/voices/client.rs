//! Voices service.

use super::types::{
    ListVoicesResponse, SharedVoicesResponse, SimilarVoicesRequest, UpdateVoiceRequest, Voice,
    VoiceSettings,
};
use crate::transport::{ApiRequest, RequestContext, Transport, TransportExt};
use crate::Result;
use std::sync::Arc;

/// Operations under `/v1/voices`, `/v1/shared-voices` and `/v1/similar-voices`.
#[derive(Clone)]
pub struct VoicesService {
    transport: Arc<dyn Transport>,
}

impl VoicesService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<ListVoicesResponse> {
        self.transport.invoke(ctx, ApiRequest::get("/v1/voices")).await
    }

    pub async fn get(&self, ctx: &RequestContext, voice_id: &str) -> Result<Voice> {
        let path = format!("/v1/voices/{}", voice_id);
        self.transport.invoke(ctx, ApiRequest::get(path)).await
    }

    /// Settings applied to voices that have none of their own.
    pub async fn default_settings(&self, ctx: &RequestContext) -> Result<VoiceSettings> {
        self.transport
            .invoke(ctx, ApiRequest::get("/v1/voices/settings/default"))
            .await
    }

    pub async fn get_settings(&self, ctx: &RequestContext, voice_id: &str) -> Result<VoiceSettings> {
        let path = format!("/v1/voices/{}/settings", voice_id);
        self.transport.invoke(ctx, ApiRequest::get(path)).await
    }

    pub async fn update_settings(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        settings: &VoiceSettings,
    ) -> Result<()> {
        let path = format!("/v1/voices/{}/settings/edit", voice_id);
        let request = ApiRequest::post(path).json(settings)?;
        self.transport.invoke_unit(ctx, request).await
    }

    /// Delete a voice. The confirmation body is drained and discarded.
    pub async fn delete(&self, ctx: &RequestContext, voice_id: &str) -> Result<()> {
        let path = format!("/v1/voices/{}", voice_id);
        self.transport.invoke_unit(ctx, ApiRequest::delete(path)).await
    }

    /// Update name, description or labels of a voice.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        voice_id: &str,
        update: &UpdateVoiceRequest,
    ) -> Result<()> {
        let path = format!("/v1/voices/{}/edit", voice_id);
        let request = ApiRequest::post(path).json(update)?;
        self.transport.invoke_unit(ctx, request).await
    }

    pub async fn shared_voices(&self, ctx: &RequestContext) -> Result<SharedVoicesResponse> {
        self.transport
            .invoke(ctx, ApiRequest::get("/v1/shared-voices"))
            .await
    }

    /// Library voices that sound like the given reference audio.
    pub async fn similar_voices(
        &self,
        ctx: &RequestContext,
        request: &SimilarVoicesRequest,
    ) -> Result<ListVoicesResponse> {
        let request = ApiRequest::post("/v1/similar-voices").json(request)?;
        self.transport.invoke(ctx, request).await
    }
}
