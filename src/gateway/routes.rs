use crate::config::{Configuration, GlobalConfiguration};
use crate::domain::model::Instance;
use crate::domain::ports::InstanceStore;
use crate::gateway::context::RequestContext;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "git-gateway";
const SERVICE_DESCRIPTION: &str =
    "git-gateway is a gateway between a static site CMS and a git hosting provider";

#[derive(Clone)]
pub(crate) struct GatewayState {
    pub version: Arc<str>,
    pub ctx: Arc<RequestContext>,
    pub global: Arc<GlobalConfiguration>,
    pub store: Arc<dyn InstanceStore>,
}

/// The tenant a request was resolved to, with the configuration in effect.
#[derive(Debug, Clone)]
pub struct ResolvedInstance {
    pub instance: Instance,
    pub config: Configuration,
}

#[derive(Debug)]
struct ApiError {
    code: StatusCode,
    msg: String,
}

impl ApiError {
    fn new(code: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "code": self.code.as_u16(), "msg": self.msg });
        (self.code, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct Settings {
    github_enabled: bool,
    gitlab_enabled: bool,
    bitbucket_enabled: bool,
    roles: Vec<String>,
}

/// Dispatch router for a construct version, or `None` for versions this
/// construct does not serve.
pub(crate) fn router_for(version: &str, state: GatewayState) -> Option<Router> {
    match version {
        "v1" => Some(
            Router::new()
                .route("/health", get(health))
                .route("/settings", get(settings))
                .fallback(not_found)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    resolve_instance,
                ))
                .with_state(state),
        ),
        _ => None,
    }
}

async fn resolve_instance(
    State(state): State<GatewayState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Claim-based tenant lookup is not served by this construct.
    if state.global.multi_instance_mode {
        return ApiError::new(
            StatusCode::NOT_IMPLEMENTED,
            "Multi-instance mode is not supported",
        )
        .into_response();
    }

    let Some(instance_id) = state.ctx.instance_id() else {
        tracing::error!("Request context carries no instance id");
        return ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "No instance configured for this request",
        )
        .into_response();
    };

    let instance = match state.store.get_instance(instance_id) {
        Ok(instance) => instance,
        Err(e) if e.is_not_found() => {
            tracing::debug!(instance_id, "Unknown instance");
            return ApiError::new(
                StatusCode::NOT_FOUND,
                "Unable to locate site configuration",
            )
            .into_response();
        }
        Err(e) => {
            tracing::error!("Instance lookup failed: {}", e);
            return ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error loading instance",
            )
            .into_response();
        }
    };

    let config = state
        .ctx
        .config()
        .cloned()
        .unwrap_or_else(|| instance.base_config.clone());
    tracing::debug!(instance_id = %instance.id, "Resolved instance");

    req.extensions_mut()
        .insert(ResolvedInstance { instance, config });
    next.run(req).await
}

async fn health(State(state): State<GatewayState>) -> Json<serde_json::Value> {
    Json(json!({
        "version": state.version.as_ref(),
        "name": SERVICE_NAME,
        "description": SERVICE_DESCRIPTION,
    }))
}

async fn settings(Extension(resolved): Extension<ResolvedInstance>) -> Json<Settings> {
    let config = &resolved.config;
    Json(Settings {
        github_enabled: config.github_enabled(),
        gitlab_enabled: config.gitlab_enabled(),
        bitbucket_enabled: config.bitbucket_enabled(),
        roles: config.roles.clone(),
    })
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}
