//! Obtaining the dispatch handler from a constructed [`Api`].
//!
//! This is the only place that knows how the handler is reached. Everything
//! else asks [`extract_handler`] and gets back a [`Router`] it can drive as a
//! `tower::Service`. The adapter is coupled to the construct's version: a
//! construct of any other version, or one without a handler, is a build
//! mismatch and must not be papered over.

use crate::gateway::{Api, API_VERSION};
use crate::utils::error::{AdapterError, Result};
use axum::Router;

/// Something that owns a request-dispatch handler.
pub trait HandlerSource {
    fn api_version(&self) -> &str;
    fn dispatch_handler(&self) -> Option<Router>;
}

impl HandlerSource for Api {
    fn api_version(&self) -> &str {
        self.version()
    }

    fn dispatch_handler(&self) -> Option<Router> {
        self.handler()
    }
}

pub fn extract_handler<S>(source: &S) -> Result<Router>
where
    S: HandlerSource + ?Sized,
{
    let found = source.api_version();
    if found != API_VERSION {
        return Err(AdapterError::HandlerExtractionError {
            reason: format!(
                "adapter is built against gateway API {} but the construct reports {}; \
                 the adapter and the gateway construct must be upgraded together",
                API_VERSION, found
            ),
        });
    }

    source
        .dispatch_handler()
        .ok_or_else(|| AdapterError::HandlerExtractionError {
            reason: format!(
                "gateway API {} exposes no dispatch handler; \
                 the construct no longer matches what this adapter expects",
                found
            ),
        })
}
