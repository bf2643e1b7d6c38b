use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    acn_observability::init();

    let config = acn_api::config::Config::from_env();
    let app = acn_api::app::build_app(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
