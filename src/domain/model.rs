use crate::config::Configuration;
use chrono::{DateTime, Utc};

/// The short id / UUID pair a tenant is known by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceIdentity {
    pub id: &'static str,
    pub uuid: &'static str,
}

impl InstanceIdentity {
    /// Exact, case-sensitive comparison.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id == id
    }

    pub fn matches_uuid(&self, uuid: &str) -> bool {
        self.uuid == uuid
    }

    /// True when either half of `instance`'s identity collides with this one.
    pub fn collides_with(&self, instance: &Instance) -> bool {
        self.matches_id(&instance.id) || self.matches_uuid(&instance.uuid)
    }
}

/// A tenant as the API construct sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: String,
    pub uuid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub raw_base_config: String,
    pub base_config: Configuration,
}
