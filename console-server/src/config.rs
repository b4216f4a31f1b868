/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backend_url: String,
}

pub fn from_env() -> ServerConfig {
    build(
        std::env::var("LISTEN_ADDR").ok(),
        std::env::var("BACKEND_URL").ok(),
    )
}

fn build(listen_addr: Option<String>, backend_url: Option<String>) -> ServerConfig {
    ServerConfig {
        listen_addr: listen_addr.unwrap_or_else(|| "0.0.0.0:3000".into()),
        backend_url: backend_url.unwrap_or_else(|| "http://localhost:8000".into()),
    }
}
