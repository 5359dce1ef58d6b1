use clap::Parser;
use pdf2xlsx::utils::{logger, validation::Validate};
use pdf2xlsx::{BatchRunner, CliConfig, DocumentPipeline, LopdfEngine, XlsxWriter};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pdf2xlsx batch run");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let monitor_enabled = config.monitor;
    let pipeline = DocumentPipeline::new(LopdfEngine, XlsxWriter::new(), config);
    let runner = BatchRunner::new_with_monitoring(pipeline, monitor_enabled);

    match runner.run() {
        Ok(summary) => {
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(text) => println!("{}", text),
                    Err(e) => tracing::error!("Failed to serialize summary: {}", e),
                }
            } else {
                println!(
                    "✅ Batch complete: {} files, {} converted, {} failed, {} rows",
                    summary.files_found, summary.succeeded, summary.failed, summary.rows_written
                );
            }
        }
        Err(e) => {
            // Per-file failures are already absorbed inside the runner; an
            // error here means the batch itself could not run. Still exit 0,
            // matching the tool this replaces.
            tracing::error!("❌ Batch run failed: {}", e);
            eprintln!("❌ {}", e);
        }
    }
}
