use axum::body::Body;
use axum::http::Request;
use bytes::Bytes;
use clap::Parser;
use git_gateway_adapter::utils::logger;
use git_gateway_adapter::{CliConfig, GatewayAdapter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting git-gateway-adapter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let adapter = GatewayAdapter::from_env();
    if let Err(e) = adapter.preflight() {
        tracing::error!("❌ Gateway handler unavailable: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.preflight {
        println!("✅ Gateway dispatch handler is available");
        return Ok(());
    }

    let mut builder = Request::builder()
        .method(config.method.as_str())
        .uri(config.path.as_str());
    for (name, value) in config.parsed_headers() {
        builder = builder.header(name, value);
    }
    let body = match &config.body {
        Some(body) => Body::from(Bytes::from(body.clone())),
        None => Body::empty(),
    };
    let request = builder.body(body)?;

    let response = adapter.handle(request).await;

    println!("{}", response.status());
    for (name, value) in response.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    println!("{}", String::from_utf8_lossy(&bytes));

    Ok(())
}
