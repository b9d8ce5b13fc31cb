use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use common::{Module, ModuleMetadata, Submission};
use tracing::info;
use tracing_subscriber::EnvFilter;

use press::config::AppConfig;
use press::{database, publish_legacy_page, seed};

#[derive(Parser)]
#[command(name = "press", about = "Publish modules into the legacy content database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create missing tables, install versioning triggers and seed vocabularies
    InitDb,
    /// Publish a module directory as the next version of an existing module
    Publish {
        /// Directory holding index.cnxml (and any resource files)
        module_dir: PathBuf,
        /// JSON file with the module's metadata
        #[arg(long)]
        metadata: PathBuf,
        /// User id recorded as the submitter
        #[arg(long, env = "PRESS_SUBMITTER")]
        submitter: String,
        /// Submission log message
        #[arg(long, short)]
        message: String,
        /// Module id, when it differs from the directory name
        #[arg(long)]
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load config")?;

    match cli.command {
        Command::InitDb => {
            let db = database::init_db(&config.database)
                .await
                .context("Failed to initialize database")?;
            seed::seed_vocabularies(&db)
                .await
                .context("Failed to seed vocabularies")?;
            info!("Database ready");
        }
        Command::Publish {
            module_dir,
            metadata,
            submitter,
            message,
            id,
        } => {
            let mut module = Module::from_dir(&module_dir)
                .await
                .with_context(|| format!("Failed to load module from {}", module_dir.display()))?;
            if id.is_some() {
                module.id = id;
            }

            let raw = tokio::fs::read(&metadata)
                .await
                .with_context(|| format!("Failed to read {}", metadata.display()))?;
            let mut metadata: ModuleMetadata =
                serde_json::from_slice(&raw).context("Failed to parse metadata")?;
            if metadata.id.is_none() {
                metadata.id = module.id.clone();
            }

            let db = database::connect(&config.database)
                .await
                .context("Failed to connect to database")?;
            let page = publish_legacy_page(
                &db,
                &module,
                &metadata,
                &Submission::new(submitter, message),
            )
            .await
            .context("Publish failed")?;

            println!("{}@{} (ident {})", page.id, page.version, page.ident);
        }
    }

    Ok(())
}
