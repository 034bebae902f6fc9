//! Tenant storage that serves exactly one, compiled-in tenant.
//!
//! The gateway API construct is written for a multi-tenant datastore and
//! resolves the tenant on every request. This deployment has no datastore, so
//! [`SingleTenantStore`] satisfies the whole [`InstanceStore`] contract with
//! degenerate semantics:
//!
//! - lookups match exactly against [`IDENTITY`] and miss otherwise
//! - create rejects a collision with [`IDENTITY`] and is a no-op otherwise
//! - update, delete and close are no-ops
//! - automigrate always fails
//!
//! Lookups never return an empty success. Callers rely on the miss to tell
//! an unknown tenant apart from this one.

use crate::domain::model::{Instance, InstanceIdentity};
use crate::domain::ports::{ConfigProvider, InstanceStore};
use crate::utils::error::{AdapterError, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

pub const INSTANCE_ID: &str = "ovo-cms";
pub const INSTANCE_UUID: &str = "d75d142d-2aca-45db-a42c-f68d6e8376e4";

pub const IDENTITY: InstanceIdentity = InstanceIdentity {
    id: INSTANCE_ID,
    uuid: INSTANCE_UUID,
};

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[derive(Clone)]
pub struct SingleTenantStore {
    config: Arc<dyn ConfigProvider>,
}

impl SingleTenantStore {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self { config }
    }

    /// Builds a fresh record; the configuration is re-read on every call.
    fn instance(&self) -> Instance {
        Instance {
            id: IDENTITY.id.to_string(),
            uuid: IDENTITY.uuid.to_string(),
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
            deleted_at: None,
            raw_base_config: String::new(),
            base_config: self.config.configuration(),
        }
    }
}

impl InstanceStore for SingleTenantStore {
    fn get_instance(&self, instance_id: &str) -> Result<Instance> {
        if IDENTITY.matches_id(instance_id) {
            return Ok(self.instance());
        }
        tracing::debug!(instance_id, "Instance lookup by id missed");
        Err(AdapterError::InstanceNotFoundError {
            key: instance_id.to_string(),
        })
    }

    fn get_instance_by_uuid(&self, uuid: &str) -> Result<Instance> {
        if IDENTITY.matches_uuid(uuid) {
            return Ok(self.instance());
        }
        tracing::debug!(uuid, "Instance lookup by uuid missed");
        Err(AdapterError::InstanceNotFoundError {
            key: uuid.to_string(),
        })
    }

    fn create_instance(&self, instance: &Instance) -> Result<()> {
        if IDENTITY.collides_with(instance) {
            return Err(AdapterError::InstanceAlreadyExistsError {
                id: instance.id.clone(),
                uuid: instance.uuid.clone(),
            });
        }
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
