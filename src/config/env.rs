use crate::config::{
    ApiConfiguration, BitBucketConfig, Configuration, GitHubConfig, GitLabConfig,
    GlobalConfiguration, JwtConfiguration, DEFAULT_API_HOST, DEFAULT_API_PORT,
};
use crate::domain::ports::ConfigProvider;
use std::collections::HashMap;
use std::env;

pub const ENV_PREFIX: &str = "GITGATEWAY";
pub const DEPLOYMENT_ENV_VAR: &str = "VERCEL_ENV";

/// Where the function is deployed, as reported by the hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentEnv {
    Production,
    Preview,
}

impl DeploymentEnv {
    /// Unset, empty and `production` all count as production.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("production") => DeploymentEnv::Production,
            Some(_) => DeploymentEnv::Preview,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self {
            DeploymentEnv::Production => "info",
            DeploymentEnv::Preview => "debug",
        }
    }
}

/// Builds configuration values from `GITGATEWAY_*` variables.
///
/// Reads the process environment unless constructed with an explicit
/// variable map. Missing variables are never an error.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigProvider {
    vars: Option<HashMap<String, String>>,
}

impl EnvConfigProvider {
    pub fn process() -> Self {
        Self { vars: None }
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => env::var(key).ok(),
        }
    }

    fn setting(&self, name: &str) -> String {
        self.var(&format!("{}_{}", ENV_PREFIX, name))
            .unwrap_or_default()
    }

    pub fn deployment_env(&self) -> DeploymentEnv {
        DeploymentEnv::from_value(self.var(DEPLOYMENT_ENV_VAR).as_deref())
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn configuration(&self) -> Configuration {
        let mut config = Configuration {
            site_url: self.setting("SITE_URL"),
            jwt: JwtConfiguration {
                secret: self.setting("JWT_SECRET"),
                admin_group_name: self.setting("JWT_ADMIN_GROUP_NAME"),
            },
            github: GitHubConfig {
                access_token: self.setting("GITHUB_ACCESS_TOKEN"),
                endpoint: self.setting("GITHUB_ENDPOINT"),
                repo: self.setting("GITHUB_REPO"),
            },
            gitlab: GitLabConfig {
                access_token: self.setting("GITLAB_ACCESS_TOKEN"),
                access_token_type: self.setting("GITLAB_ACCESS_TOKEN_TYPE"),
                endpoint: self.setting("GITLAB_ENDPOINT"),
                repo: self.setting("GITLAB_REPO"),
            },
            bitbucket: BitBucketConfig {
                refresh_token: self.setting("BITBUCKET_REFRESH_TOKEN"),
                client_id: self.setting("BITBUCKET_CLIENT_ID"),
                client_secret: self.setting("BITBUCKET_CLIENT_SECRET"),
                endpoint: self.setting("BITBUCKET_ENDPOINT"),
                repo: self.setting("BITBUCKET_REPO"),
            },
            roles: parse_list(&self.setting("ROLES")),
        };
        config.apply_defaults();
        config
    }

    fn global_configuration(&self) -> GlobalConfiguration {
        let host = self.setting("API_HOST");
        GlobalConfiguration {
            api: ApiConfiguration {
                host: if host.is_empty() {
                    DEFAULT_API_HOST.to_string()
                } else {
                    host
                },
                port: self
                    .setting("API_PORT")
                    .parse()
                    .unwrap_or(DEFAULT_API_PORT),
                endpoint: self.setting("API_ENDPOINT"),
            },
            multi_instance_mode: false,
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
