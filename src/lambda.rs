use git_gateway_adapter::core::lambda::{into_gateway_request, into_lambda_response};
use git_gateway_adapter::utils::logger;
use git_gateway_adapter::{EnvConfigProvider, GatewayAdapter};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use std::sync::Arc;

async fn function_handler(adapter: &GatewayAdapter, event: Request) -> Result<Response<Body>, Error> {
    let response = adapter.handle(into_gateway_request(event)).await;
    Ok(into_lambda_response(response).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let provider = EnvConfigProvider::process();
    logger::init_lambda_logger(provider.deployment_env());

    let adapter = GatewayAdapter::new(Arc::new(provider));
    // A construct without a usable handler is a build mismatch; refuse to start.
    adapter.preflight()?;

    tracing::info!("Starting git gateway Lambda function");

    let adapter = &adapter;
    run(service_fn(move |event: Request| async move {
        function_handler(adapter, event).await
    }))
    .await
}
