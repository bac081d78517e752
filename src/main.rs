//! ledgerdash main entry point

use clap::Parser;
use ledgerdash_api::start_server;
use ledgerdash_config::Config;
use ledgerdash_core::Ledger;
use ledgerdash_store::JsonFileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::RwLock;

#[derive(Parser, Debug)]
#[command(name = "ledgerdash")]
#[command(version = "0.1.0")]
#[command(about = "A personal-finance dashboard over a flat JSON transaction ledger", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration to stdout and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(ledgerdash_config::ConfigError::FileNotFound { .. }) => Config::default(),
        Err(e) => return Err(anyhow::anyhow!("Failed to load configuration: {}", e)),
    };

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", &config.logging.level);
    }
    env_logger::init();

    log::info!(
        "Config loaded: ledger document at {}",
        config.ledger_path().display()
    );

    let rt = Runtime::new()?;
    rt.block_on(async {
        let store = Arc::new(JsonFileStore::new(config.ledger_path()));
        let ledger = Ledger::new(config.clone(), store);

        // Startup probe only; every operation loads the document
        // itself, and a missing file stays an error on each request.
        match ledger.record_count().await {
            Ok(count) => log::info!("Ledger document loaded: {} transaction(s)", count),
            Err(e) => log::warn!(
                "Ledger document not readable: {} ({})",
                config.ledger_path().display(),
                e
            ),
        }

        let ledger = Arc::new(RwLock::new(ledger));
        start_server(config, ledger).await
    })
}
