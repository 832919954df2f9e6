use clap::Parser;
use portfolio_export::utils::{logger, validation::Validate};
use portfolio_export::{
    CliConfig, ConsoleNotifier, ExportEngine, ExportError, ExportSettings, LocalStorage,
    SitePipeline, TomlConfig,
};

fn exit_with(e: &ExportError, code: i32) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(code);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // The config file decides the log level, so it is read before logging starts.
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            exit_with(&e, 1);
        }
    };

    let log_level = file_config.as_ref().and_then(|c| c.log_level());
    if file_config.as_ref().is_some_and(|c| c.json_logs()) && !cli.verbose {
        logger::init_json_logger(log_level);
    } else {
        logger::init_cli_logger(cli.verbose, log_level);
    }

    tracing::info!("Starting portfolio-export");
    tracing::debug!("CLI config: {:?}", cli);

    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            exit_with(&e, 1);
        }
    }

    let settings = match ExportSettings::resolve(&cli.overrides(), file_config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e, 1),
    };
    if let Err(e) = settings.validate() {
        exit_with(&e, 1);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::new(settings.output_path.clone());
    let source = settings.source.clone();
    let engine = ExportEngine::new(SitePipeline::new(storage, settings, source));

    if cli.dry_run {
        let bundle = match engine.pipeline().preview().await {
            Ok(bundle) => bundle,
            Err(e) => exit_with(&e, 2),
        };
        println!("🔎 Dry run: {} would contain", bundle.archive_name);
        for (name, contents) in bundle.site.artifacts() {
            println!("   {} ({} bytes)", name, contents.len());
        }
        return Ok(());
    }

    match engine.run_or_notify(&ConsoleNotifier).await {
        Some(output_path) => {
            tracing::info!("✅ Export completed successfully!");
            println!("✅ Portfolio exported!");
            println!("📁 Archive saved to: {}", output_path);
            Ok(())
        }
        None => std::process::exit(2),
    }
}
