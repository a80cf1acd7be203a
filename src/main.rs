use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use basecount::adapter::RequestAdapter;
use basecount::adapter::invocation::InvocationAdapter;
use basecount::consts::{DEFAULT_HOST, DEFAULT_PORT};
use basecount::server::{Server, ServerConfig};

#[derive(Parser)]
#[command(name = "basecount", version, about = "Count the bases, serve the counts.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the analyzer over HTTP (POST /validate)
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Analyze one JSON event payload and print the result envelope
    Invoke {
        /// The event payload, e.g. '{"sequence":"ACGTACGT"}'.
        /// Reads stdin when neither this nor --file is given.
        payload: Option<String>,

        /// Read the event payload from a file
        #[arg(short, long, conflicts_with = "payload")]
        file: Option<PathBuf>,

        /// Pretty-print the envelope
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => {
            let server = Server::bind(&ServerConfig { host, port }).await?;
            server.run().await
        }
        Command::Invoke {
            payload,
            file,
            pretty,
        } => invoke(payload, file, pretty),
    }
}

fn invoke(payload: Option<String>, file: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let raw = match (payload, file) {
        (Some(arg), _) => arg,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // An empty payload gets the same leniency as a missing one
    let event = if raw.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("payload is not valid JSON: {e}"))?
    };

    let envelope = InvocationAdapter.handle(event)?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    println!("{rendered}");

    Ok(())
}
