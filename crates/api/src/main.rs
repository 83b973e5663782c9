use launchpad_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    launchpad_observability::init();

    let config = Config::init()?;
    tracing::info!(
        environment = %config.env(),
        bind_addr = %config.bind_addr(),
        port = config.port(),
        route_matching = ?config.route_matching(),
        "configuration loaded"
    );

    let addr = config.socket_addr()?;
    let app = launchpad_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
