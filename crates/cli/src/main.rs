//! # rootwalk
//!
//! `host`-style lookups resolved iteratively from the root servers down.

mod bootstrap;
mod di;
mod output;

use clap::Parser;
use rootwalk_domain::CliOverrides;
use std::io;
use tracing::{debug, info, warn};

use bootstrap::{init_logging, load_config, log_config};
use di::DnsServices;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Iterative DNS lookups starting from the root servers")]
struct Cli {
    /// Domain names to look up
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Destination port for every nameserver
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bound on nested lookups before giving up on a name
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Debug logging and a per-name query summary on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print each report as one JSON line
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        query_timeout: cli.timeout,
        port: cli.port,
        max_depth: cli.max_depth,
        log_level: cli.verbose.then(|| "debug".to_string()),
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config(cli.config.as_deref(), &config);

    let services = DnsServices::new(&config);

    for name in &cli.names {
        let queries_before = services.resolver.query_count();
        let stats_before = services.resolver.cache_stats();

        match services.host_lookup.execute(name).await {
            Ok(report) => {
                if report.is_empty() {
                    debug!(name = %name, "No records found");
                }
                let mut out = io::stdout().lock();
                if cli.json {
                    output::write_json(&mut out, &report)?;
                } else {
                    output::write_text(&mut out, &report)?;
                }
            }
            Err(e) => {
                warn!(name = %name, error = %e, "Lookup failed, skipping");
            }
        }

        if cli.verbose {
            let stats = services.resolver.cache_stats();
            info!(
                name = %name,
                queries = services.resolver.query_count() - queries_before,
                exact_hits = stats.exact_hits - stats_before.exact_hits,
                tld_hits = stats.tld_hits - stats_before.tld_hits,
                total_queries = services.resolver.query_count(),
                "Lookup summary"
            );
        }
    }

    Ok(())
}
