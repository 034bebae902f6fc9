use crate::config::{Configuration, GlobalConfiguration};
use crate::domain::model::Instance;
use crate::utils::error::Result;

/// Tenant storage as required by the gateway API construct.
///
/// The construct resolves the tenant through this trait on every request.
/// Calls are synchronous; implementations must not block on I/O.
pub trait InstanceStore: Send + Sync {
    fn get_instance(&self, instance_id: &str) -> Result<Instance>;
    fn get_instance_by_uuid(&self, uuid: &str) -> Result<Instance>;
    fn create_instance(&self, instance: &Instance) -> Result<()>;
    fn update_instance(&self, instance: &Instance) -> Result<()>;
    fn delete_instance(&self, instance: &Instance) -> Result<()>;
    fn automigrate(&self) -> Result<()>;
    fn close(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    /// Per-tenant configuration with defaults applied. Pure and repeatable.
    fn configuration(&self) -> Configuration;
    fn global_configuration(&self) -> GlobalConfiguration;
}
