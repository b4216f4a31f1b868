use console_server::{config, proxy};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::from_env();
    let state = proxy::ProxyState::new(&config.backend_url);
    let app = proxy::admin_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("bind listen addr");

    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.backend_url,
        "console proxy listening"
    );
    axum::serve(listener, app).await.expect("serve");
}
