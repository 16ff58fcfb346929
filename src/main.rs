use tokio;
use tracing_subscriber::{prelude::*, EnvFilter};

use gamehub::cli;

#[tokio::main]
async fn main() {
    init_logging();
    cli::cli_main().await;
}

/// Log to stderr so results on stdout stay clean. RUST_LOG overrides the default level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
