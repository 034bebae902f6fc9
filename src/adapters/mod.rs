// Adapters layer: concrete implementations of the domain ports.

pub mod single_tenant;

pub use single_tenant::{SingleTenantStore, IDENTITY, INSTANCE_ID, INSTANCE_UUID};
