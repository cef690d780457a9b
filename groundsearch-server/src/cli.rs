use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "groundsearch",
    about = "GroundSearch - web-grounded search assistant",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Path to config.json")]
    pub config: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP server (default if no command specified)")]
    Serve {
        #[arg(long, help = "Bind address (overrides config)")]
        host: Option<String>,

        #[arg(short, long, help = "Port (overrides config)")]
        port: Option<u16>,
    },

    #[command(about = "Ask a running server a question")]
    Ask {
        #[arg(help = "Question to search for")]
        query: String,

        #[arg(long, help = "Continue an existing session")]
        session: Option<String>,

        #[arg(long, help = "Server base URL (defaults to the configured host and port)")]
        server: Option<String>,
    },
}
