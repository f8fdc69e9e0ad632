use clap::Parser;
use matchday_etl::core::ConfigProvider;
use matchday_etl::utils::{logger, validation::Validate};
use matchday_etl::{BlogPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting matchday-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading pipeline settings from {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file {}: {}", path, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            run_pipeline(config, monitor_enabled).await;
        }
        None => {
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            run_pipeline(cli, monitor_enabled).await;
        }
    }

    Ok(())
}

async fn run_pipeline<C>(config: C, monitor_enabled: bool)
where
    C: ConfigProvider + 'static,
{
    let storage = LocalStorage::new(".".to_string());
    let pipeline = BlogPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Blog page generated successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Blog generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
