//! speechd CLI
//!
//! Speaks the given text through the local speech-dispatcher daemon.

use std::path::PathBuf;

use clap::Parser;
use speechd_client::{Client, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// speechd command line client
#[derive(Parser, Debug)]
#[command(name = "speechd-cli")]
#[command(about = "Speak text through the local speech-dispatcher daemon")]
#[command(version)]
struct Args {
    /// Text to speak
    #[arg(required = true)]
    text: Vec<String>,

    /// Daemon socket path (default: $XDG_RUNTIME_DIR/speech-dispatcher/speechd.sock)
    #[arg(short, long)]
    socket: Option<PathBuf>,

    /// Client name announced to the daemon
    #[arg(short, long, default_value = "speechd-cli")]
    client_name: String,

    /// Queue after current speech instead of interrupting it
    #[arg(long)]
    no_interrupt: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,speechd_client=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let mut builder = Config::builder().client_name(args.client_name.as_str());
    if let Some(path) = args.socket.clone() {
        builder = builder.socket_path(path);
    }
    let config = builder.build();

    let mut client = match Client::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to daemon: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = client.set_client_name(&args.client_name) {
        tracing::error!("Failed to set client name: {}", e);
        std::process::exit(1);
    }

    let text = args.text.join(" ");
    match client.speak(&text, !args.no_interrupt) {
        Ok(id) => println!("{}", id),
        Err(e) => {
            tracing::error!("Speak failed: {}", e);
            std::process::exit(1);
        }
    }

    client.close();
}
