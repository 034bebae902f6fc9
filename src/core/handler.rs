use crate::adapters::{SingleTenantStore, INSTANCE_ID};
use crate::config::EnvConfigProvider;
use crate::core::extractor::extract_handler;
use crate::domain::ports::ConfigProvider;
use crate::gateway::{Api, RequestContext, API_VERSION};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::Validate;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tracing::Instrument;

/// Serves the gateway API for the single compiled-in tenant.
///
/// Holds no per-request state: configuration is resolved, the construct is
/// built and its handler obtained afresh for every request.
#[derive(Clone)]
pub struct GatewayAdapter {
    provider: Arc<dyn ConfigProvider>,
}

impl GatewayAdapter {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvConfigProvider::process()))
    }

    fn api(&self, ctx: RequestContext) -> Api {
        Api::new_with_version(
            ctx,
            self.provider.global_configuration(),
            Arc::new(SingleTenantStore::new(self.provider.clone())),
            API_VERSION,
        )
    }

    fn context(&self) -> Result<RequestContext> {
        self.provider.global_configuration().validate()?;
        RequestContext::new().with_instance_config(self.provider.configuration(), INSTANCE_ID)
    }

    /// Checks once, before serving, that the construct still exposes a
    /// handler this adapter can drive.
    pub fn preflight(&self) -> Result<()> {
        let _handler = extract_handler(&self.api(RequestContext::new()))?;
        tracing::info!(version = API_VERSION, "Gateway dispatch handler available");
        Ok(())
    }

    pub async fn handle(&self, req: Request) -> Response {
        let span = tracing::info_span!(
            "gateway_request",
            method = %req.method(),
            path = %req.uri().path()
        );
        self.dispatch(req).instrument(span).await
    }

    async fn dispatch(&self, req: Request) -> Response {
        let ctx = match self.context() {
            Ok(ctx) => ctx,
            Err(e) => {
                tracing::warn!("Configuration resolution failed: {}", e);
                return error_response(&e);
            }
        };

        let handler = match extract_handler(&self.api(ctx)) {
            Ok(handler) => handler,
            Err(e) => {
                tracing::error!("❌ {}", e);
                return error_response(&e);
            }
        };

        let response = handler
            .oneshot(req)
            .await
            .unwrap_or_else(|never| match never {});
        tracing::debug!(status = %response.status(), "Gateway responded");
        response
    }
}

fn error_response(err: &AdapterError) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{}\n", err)).into_response()
}
