//! MyWebComic Site Server
//!
//! Serves the built frontend bundle.
//!
//! Run with: cargo run --bin webcomic
//!
//! Configuration is read from the first of
//! `~/.config/webcomic/config.toml`, `/etc/webcomic/config.toml` and
//! `./config.toml`, then overridden by `WEBCOMIC_*` environment variables.
//! `RUST_LOG` overrides the configured log level.

use webcomic::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    webcomic::logging::init(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting MyWebComic server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Frontend bundle: {}", config.server.dist_dir);

    webcomic::serve(&config.server).await?;

    tracing::info!("MyWebComic server stopped");
    Ok(())
}
