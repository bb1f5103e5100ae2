use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory todo service. State is lost on restart.
#[derive(Parser, Debug)]
#[command(name = "todo-server", version, about)]
struct Cli {
    /// Address to bind the HTTP listener on
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listener = TcpListener::bind(&cli.addr).await?;
    tracing::info!(addr = %cli.addr, "todo server listening");
    todo_server::run(listener).await
}
