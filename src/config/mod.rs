#[cfg(feature = "cli")]
pub mod cli;
pub mod env;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::{DeploymentEnv, EnvConfigProvider};

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_one_of, validate_optional_url, validate_positive_number, validate_url, Validate,
};

pub const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";
pub const DEFAULT_GITLAB_ENDPOINT: &str = "https://gitlab.com/api/v4";
pub const DEFAULT_GITLAB_TOKEN_TYPE: &str = "personal_access";
pub const DEFAULT_BITBUCKET_ENDPOINT: &str = "https://api.bitbucket.org/2.0";
pub const DEFAULT_ADMIN_GROUP_NAME: &str = "admin";
pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PORT: u16 = 8087;

const GITLAB_TOKEN_TYPES: [&str; 2] = ["oauth", "personal_access"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JwtConfiguration {
    pub secret: String,
    pub admin_group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitHubConfig {
    pub access_token: String,
    pub endpoint: String,
    pub repo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitLabConfig {
    pub access_token: String,
    pub access_token_type: String,
    pub endpoint: String,
    pub repo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBucketConfig {
    pub refresh_token: String,
    pub client_id: String,
    pub client_secret: String,
    pub endpoint: String,
    pub repo: String,
}

/// Per-tenant settings attached to an [`Instance`](crate::domain::model::Instance).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub site_url: String,
    pub jwt: JwtConfiguration,
    pub github: GitHubConfig,
    pub gitlab: GitLabConfig,
    pub bitbucket: BitBucketConfig,
    pub roles: Vec<String>,
}

impl Configuration {
    /// Fills every unset field that has a default. Idempotent.
    pub fn apply_defaults(&mut self) {
        if self.jwt.admin_group_name.is_empty() {
            self.jwt.admin_group_name = DEFAULT_ADMIN_GROUP_NAME.to_string();
        }
        if self.github.endpoint.is_empty() {
            self.github.endpoint = DEFAULT_GITHUB_ENDPOINT.to_string();
        }
        if self.gitlab.endpoint.is_empty() {
            self.gitlab.endpoint = DEFAULT_GITLAB_ENDPOINT.to_string();
        }
        if self.gitlab.access_token_type.is_empty() {
            self.gitlab.access_token_type = DEFAULT_GITLAB_TOKEN_TYPE.to_string();
        }
        if self.bitbucket.endpoint.is_empty() {
            self.bitbucket.endpoint = DEFAULT_BITBUCKET_ENDPOINT.to_string();
        }
    }

    pub fn github_enabled(&self) -> bool {
        !self.github.repo.is_empty()
    }

    pub fn gitlab_enabled(&self) -> bool {
        !self.gitlab.repo.is_empty()
    }

    pub fn bitbucket_enabled(&self) -> bool {
        !self.bitbucket.repo.is_empty()
    }
}

impl Validate for Configuration {
    fn validate(&self) -> Result<()> {
        validate_optional_url("site_url", &self.site_url)?;
        validate_url("github.endpoint", &self.github.endpoint)?;
        validate_url("gitlab.endpoint", &self.gitlab.endpoint)?;
        validate_one_of(
            "gitlab.access_token_type",
            &self.gitlab.access_token_type,
            &GITLAB_TOKEN_TYPES,
        )?;
        validate_url("bitbucket.endpoint", &self.bitbucket.endpoint)?;

        tracing::debug!("Instance configuration validation passed");
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfiguration {
    pub host: String,
    pub port: u16,
    pub endpoint: String,
}

impl Default for ApiConfiguration {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            endpoint: String::new(),
        }
    }
}

/// Process-wide settings handed to the API construct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConfiguration {
    pub api: ApiConfiguration,
    /// Always false here: tenants are never looked up from request claims.
    pub multi_instance_mode: bool,
}

impl Validate for GlobalConfiguration {
    fn validate(&self) -> Result<()> {
        validate_positive_number("api.port", self.api.port, 1)?;
        validate_optional_url("api.endpoint", &self.api.endpoint)?;
        Ok(())
    }
}
