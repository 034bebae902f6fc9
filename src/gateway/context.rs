use crate::config::Configuration;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

/// Per-request values the API construct is built with.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    config: Option<Configuration>,
    instance_id: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the request to one tenant and its configuration.
    pub fn with_instance_config(mut self, config: Configuration, instance_id: &str) -> Result<Self> {
        validate_non_empty_string("instance_id", instance_id)?;
        config.validate()?;

        self.config = Some(config);
        self.instance_id = Some(instance_id.to_string());
        Ok(self)
    }

    pub fn config(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }
}
