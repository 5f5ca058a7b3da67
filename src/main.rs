use clap::Parser;
use modelmetrics::cli::{Cli, Commands};
use modelmetrics::types::config::Config;
use modelmetrics::MetricsResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> MetricsResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("modelmetrics={}", log_level)
            .parse()
            .unwrap_or_else(|_| "modelmetrics=info".parse().expect("fallback directive is valid")),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.general.log_format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            modelmetrics::cli::commands::init(path).await?;
        }
        Commands::Key { pair } => {
            modelmetrics::cli::commands::key(&pair)?;
        }
        Commands::Put {
            pair,
            category,
            duration_ms,
            scoring_time_ms,
            payload,
        } => {
            modelmetrics::cli::commands::put(
                &pair,
                category,
                duration_ms,
                scoring_time_ms,
                payload.as_deref(),
                &config,
            )
            .await?;
        }
        Commands::Get { pair, json } => {
            modelmetrics::cli::commands::get(&pair, json, &config).await?;
        }
        Commands::Version => {
            modelmetrics::cli::commands::version();
        }
    }

    Ok(())
}
