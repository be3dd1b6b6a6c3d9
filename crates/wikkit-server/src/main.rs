//! Wikkit server binary.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use wikkit_server::WikiConfig;

/// Wikkit - a small file-backed Markdown wiki
#[derive(Parser, Debug)]
#[command(name = "wikkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "WIKKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides server.listen)
    #[arg(short, long, env = "WIKKIT_LISTEN")]
    listen: Option<SocketAddr>,

    /// Directory holding page files (overrides storage.data_dir)
    #[arg(short, long, env = "WIKKIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Page that `/` redirects to (overrides site.front_page)
    #[arg(long, env = "WIKKIT_FRONT_PAGE")]
    front_page: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&mut self, config: &mut WikiConfig) {
        if let Some(listen) = self.listen.take() {
            config.server.listen = listen;
        }
        if let Some(data_dir) = self.data_dir.take() {
            config.storage.data_dir = data_dir;
        }
        if let Some(front_page) = self.front_page.take() {
            config.site.front_page = front_page;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wikkit=debug".into()),
        )
        .init();

    let mut args = Args::parse();
    let mut config = WikiConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    if args.print_config {
        config.validate()?;
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    if let Err(e) = wikkit_server::serve(config).await {
        tracing::error!("Server failed: {e}");
        return Err(e.into());
    }
    Ok(())
}
