//! The gateway API construct.
//!
//! An [`Api`] is built once per request from a [`RequestContext`], the global
//! configuration and an [`InstanceStore`]. It owns the router that actually
//! dispatches requests; callers get at it through [`Api::handler`].

pub mod context;
pub mod routes;

pub use context::RequestContext;
pub use routes::{ResolvedInstance, SERVICE_NAME};

use crate::config::GlobalConfiguration;
use crate::domain::ports::InstanceStore;
use axum::Router;
use routes::GatewayState;
use std::sync::Arc;

/// Construct version this crate's router understands.
pub const API_VERSION: &str = "v1";

pub struct Api {
    version: String,
    handler: Option<Router>,
}

impl Api {
    pub fn new_with_version(
        ctx: RequestContext,
        global: GlobalConfiguration,
        store: Arc<dyn InstanceStore>,
        version: &str,
    ) -> Self {
        let state = GatewayState {
            version: Arc::from(version),
            ctx: Arc::new(ctx),
            global: Arc::new(global),
            store,
        };

        Self {
            version: version.to_string(),
            handler: routes::router_for(version, state),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The dispatch router, if one exists for this construct's version.
    pub fn handler(&self) -> Option<Router> {
        self.handler.clone()
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("version", &self.version)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{SingleTenantStore, INSTANCE_ID};
    use crate::config::EnvConfigProvider;
    use crate::domain::model::Instance;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::{AdapterError, Result};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn api(vars: &[(&str, &str)], instance_id: &str, version: &str) -> Api {
        let provider: Arc<dyn ConfigProvider> =
            Arc::new(EnvConfigProvider::from_vars(vars.iter().copied()));
        let ctx = RequestContext::new()
            .with_instance_config(provider.configuration(), instance_id)
            .unwrap();
        Api::new_with_version(
            ctx,
            provider.global_configuration(),
            Arc::new(SingleTenantStore::new(provider)),
            version,
        )
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let res = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_unknown_version_has_no_handler() {
        let api = api(&[], INSTANCE_ID, "v2");
        assert_eq!(api.version(), "v2");
        assert!(api.handler().is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let router = api(&[], INSTANCE_ID, API_VERSION).handler().unwrap();
        let (status, body) = get(router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], "v1");
        assert_eq!(body["name"], "git-gateway");
    }

    #[tokio::test]
    async fn test_settings_reflect_configured_providers() {
        let router = api(
            &[
                ("GITGATEWAY_GITLAB_REPO", "group/site"),
                ("GITGATEWAY_ROLES", "admin,editor"),
            ],
            INSTANCE_ID,
            API_VERSION,
        )
        .handler()
        .unwrap();
        let (status, body) = get(router, "/settings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["github_enabled"], false);
        assert_eq!(body["gitlab_enabled"], true);
        assert_eq!(body["bitbucket_enabled"], false);
        assert_eq!(body["roles"], serde_json::json!(["admin", "editor"]));
    }

    #[tokio::test]
    async fn test_unknown_instance_is_not_found() {
        let router = api(&[], "other-tenant", API_VERSION).handler().unwrap();
        let (status, body) = get(router, "/health").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
        assert_eq!(body["msg"], "Unable to locate site configuration");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let router = api(&[], INSTANCE_ID, API_VERSION).handler().unwrap();
        let (status, body) = get(router, "/github/contents/README.md").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Not found");
    }

    #[tokio::test]
    async fn test_multi_instance_mode_is_refused() {
        let provider: Arc<dyn ConfigProvider> = Arc::new(EnvConfigProvider::from_vars(
            Vec::<(String, String)>::new(),
        ));
        let ctx = RequestContext::new()
            .with_instance_config(provider.configuration(), INSTANCE_ID)
            .unwrap();
        let mut global = provider.global_configuration();
        global.multi_instance_mode = true;

        let router = Api::new_with_version(
            ctx,
            global,
            Arc::new(SingleTenantStore::new(provider)),
            API_VERSION,
        )
        .handler()
        .unwrap();
        let (status, _) = get(router, "/health").await;

        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    }

    struct BrokenStore;

    impl InstanceStore for BrokenStore {
        fn get_instance(&self, _instance_id: &str) -> Result<Instance> {
            Err(AdapterError::MigrationNotSupportedError)
        }

        fn get_instance_by_uuid(&self, _uuid: &str) -> Result<Instance> {
            Err(AdapterError::MigrationNotSupportedError)
        }

        fn create_instance(&self, _instance: &Instance) -> Result<()> {
            Ok(())
        }

        fn update_instance(&self, _instance: &Instance) -> Result<()> {
            Ok(())
        }

        fn delete_instance(&self, _instance: &Instance) -> Result<()> {
            Ok(())
        }

        fn automigrate(&self) -> Result<()> {
            Err(AdapterError::MigrationNotSupportedError)
        }

        fn close(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let provider = EnvConfigProvider::from_vars(Vec::<(String, String)>::new());
        let ctx = RequestContext::new()
            .with_instance_config(provider.configuration(), INSTANCE_ID)
            .unwrap();

        let router = Api::new_with_version(
            ctx,
            provider.global_configuration(),
            Arc::new(BrokenStore),
            API_VERSION,
        )
        .handler()
        .unwrap();
        let (status, body) = get(router, "/settings").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 500);
        assert_eq!(body["msg"], "Database error loading instance");
    }
}
