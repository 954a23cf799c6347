use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dr_macadamia::{
    api,
    cli::{Cli, Commands, Source},
    config::Config,
    kb::KnowledgeBase,
};

/// Logs go to stderr so stdout only carries the rendered views.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "dr_macadamia=info,tower_http=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let kb = KnowledgeBase::load(&config.data_path)?;
    let app = api::create_router(kb);

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Dr. Macadamia listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    let command = cli.command();

    match command {
        // Default: start server
        Commands::Serve { .. } if !cli.is_remote() => serve(config).await?,
        command => {
            let source = Source::open(&cli, &config)?;
            print!("{}", source.run(&command).await?);
        }
    }

    Ok(())
}
