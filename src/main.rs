//! Department Registry - desktop CRUD for departments and sellers.

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::egui;
use dept_registry as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::db::{self, DaoFactory};
use app::ui::App;

/// Desktop registry for departments and sellers.
#[derive(Parser)]
#[command(name = "dept-registry")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Create missing tables before opening the window
    #[arg(long)]
    init_schema: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let (config, wrote_defaults) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, false),
        ConfigLoadResult::Missing => {
            let config = AppConfig::default();
            config
                .save(&config_path)
                .with_context(|| format!("Failed to write default config to {:?}", config_path))?;
            (config, true)
        }
        ConfigLoadResult::Invalid(e) => {
            return Err(anyhow!(e).context(format!("Invalid config at {:?}", config_path)));
        }
    };

    // Initialize logging
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("Department Registry starting...");
    tracing::info!("Config path: {:?}", config_path);
    if wrote_defaults {
        tracing::info!("Config missing, wrote defaults");
    }

    // Create tokio runtime for database calls
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let factory = rt.block_on(open_database(&config, cli.init_schema))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Department Registry")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Department Registry",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(factory, config, rt)))
        }),
    )
    .map_err(|e| anyhow!("Window error: {}", e))
}

/// Connect, verify the connection, and optionally create missing tables.
async fn open_database(config: &AppConfig, init_schema: bool) -> anyhow::Result<DaoFactory> {
    let factory = DaoFactory::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    db::test_connection(factory.connection())
        .await
        .context("Database did not answer")?;

    if init_schema {
        db::ensure_schema(factory.connection())
            .await
            .context("Failed to create tables")?;
    }

    // Log connection info
    if let Ok(counts) = db::get_table_counts(factory.connection()).await {
        tracing::info!("Tables: {} departments, {} sellers", counts.departments, counts.sellers);
    }

    Ok(factory)
}
