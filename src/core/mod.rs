pub mod extractor;
pub mod handler;
#[cfg(feature = "lambda")]
pub mod lambda;

pub use crate::domain::model::{Instance, InstanceIdentity};
pub use crate::domain::ports::{ConfigProvider, InstanceStore};
pub use crate::utils::error::Result;
pub use extractor::{extract_handler, HandlerSource};
pub use handler::GatewayAdapter;
