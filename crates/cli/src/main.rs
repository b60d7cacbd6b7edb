use clap::Parser;
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_jobs::{CacheSweepJob, JobRunner};
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - DNS lookup service with access control and TTL caching")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory holding cache.json, blacklist.txt and whitelist.txt
    #[arg(long, value_name = "DIR")]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        data_dir: cli.data_dir,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));
    info!(
        web_port = config.server.web_port,
        upstreams = config.resolver.upstream_servers.len(),
        workers = config.resolver.workers,
        "Configuration loaded"
    );

    // Dependency Injection - Build all dependencies
    let stores = di::Stores::new(&config);
    let services = di::Services::new(&config, &stores);
    let use_cases = di::UseCases::new(&config, &services)?;

    let shutdown = CancellationToken::new();
    let job_handles = JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.cache.clone())
                .with_interval(config.cache.sweep_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, use_cases.into_app_state(), shutdown.clone()).await?;

    shutdown.cancel();
    for handle in job_handles {
        let _ = handle.await;
    }

    info!("Server shutdown complete");
    Ok(())
}
