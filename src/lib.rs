pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod gateway;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{SingleTenantStore, INSTANCE_ID, INSTANCE_UUID};
pub use config::{Configuration, EnvConfigProvider, GlobalConfiguration};
pub use self::core::{extract_handler, GatewayAdapter};
pub use utils::error::{AdapterError, Result};
