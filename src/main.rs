use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use simplecdn::domain::ports::{CommandHandler, PluginLifecycle};
use simplecdn::infrastructure::{CliArgs, StorageManager, merge_env_overrides};
use simplecdn::presentation::CdnPlugin;

fn init_logging(args: &CliArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.unwrap_or_default().to_string()));

    if let Some(log_path) = &args.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    init_logging(&args)?;

    info!(version = simplecdn::VERSION, "Starting simplecdn console host");

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    merge_env_overrides(&mut config);

    let plugin = CdnPlugin::new();
    plugin.on_load(&config).await;

    if args.command.is_empty() {
        println!("No command given; try: simplecdn cdn <url> [url ...] [--preheat]");
    } else {
        let line = args.command.join(" ");
        for reply in plugin.handle_command(&line).await {
            println!("{reply}");
        }
    }

    plugin.on_terminate().await;

    Ok(())
}
