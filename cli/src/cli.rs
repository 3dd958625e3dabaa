use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "lodbrowse")]
/// lodbrowse linked-data browser and HTTP server
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the lodbrowse HTTP server
    Serve {
        /// JSON configuration file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: PathBuf,
        /// Host and port to listen to
        ///
        /// By default the server listens on all interfaces, on the `serve_port` of the
        /// configuration.
        #[arg(short, long, value_hint = ValueHint::Hostname)]
        bind: Option<String>,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
    },
    /// Print everything the endpoint knows about a resource as JSON
    Describe {
        /// JSON configuration file
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: PathBuf,
        /// URI of the resource
        #[arg(value_hint = ValueHint::Url)]
        uri: String,
    },
}
