use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use lodbrowse::{Browser, BrowserConfig};
use lodbrowse_web::ServerConfig;
use std::io::{self, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lodbrowse=info")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Serve { config, bind, cors } => {
            let mut server = ServerConfig::new(load_config(&config)?);
            if let Some(bind) = bind {
                server.bind = bind;
            }
            server.cors = cors;
            lodbrowse_web::serve(server).await
        }
        Command::Describe { config, uri } => {
            let browser = Browser::new(&load_config(&config)?)?;
            let outcome = browser.describe(&uri).await?;
            let mut stdout = stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &outcome)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<BrowserConfig> {
    BrowserConfig::from_file(path)
        .with_context(|| format!("Failed to load the configuration from {}", path.display()))
}
