//! User service.

use super::types::{Subscription, User};
use crate::transport::{ApiRequest, RequestContext, Transport, TransportExt};
use crate::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    transport: Arc<dyn Transport>,
}

impl UserService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_subscription(&self, ctx: &RequestContext) -> Result<Subscription> {
        self.transport
            .invoke(ctx, ApiRequest::get("/v1/user/subscription"))
            .await
    }

    pub async fn get_info(&self, ctx: &RequestContext) -> Result<User> {
        self.transport.invoke(ctx, ApiRequest::get("/v1/user")).await
    }
}
