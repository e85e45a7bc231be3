//! SearXNG client CLI - query a SearXNG instance from the command line.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use searxng_client::{
    proxy::ProxyConfig, ClientConfig, SearchParams, SearxngClient,
};

/// Query a self-hosted SearXNG instance and print a result digest
#[derive(Parser)]
#[command(name = "searxng-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// SearXNG base URL (defaults to the SEARXNG_URL environment variable)
    #[arg(short, long)]
    url: Option<String>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pageno: u32,

    /// Time range filter: day, month or year (other values are ignored)
    #[arg(short, long)]
    time_range: Option<String>,

    /// Result language, e.g. "en-US" ("all" means unrestricted)
    #[arg(short, long)]
    language: Option<String>,

    /// Safe search level: 0, 1 or 2 (other values are ignored)
    #[arg(short, long)]
    safesearch: Option<String>,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080)
    #[arg(long)]
    proxy: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let mut config = match cli.url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env()?,
    };

    if let Some(proxy_url) = &cli.proxy {
        config = config.with_proxy(ProxyConfig::parse(proxy_url)?);
        if cli.verbose {
            eprintln!("Using proxy: {}", proxy_url);
        }
    }

    let mut params = SearchParams::new(&cli.query).with_page(cli.pageno);
    if let Some(range) = &cli.time_range {
        params = params.with_time_range_str(range);
    }
    if let Some(language) = &cli.language {
        params = params.with_language(language);
    }
    if let Some(level) = &cli.safesearch {
        params = params.with_safesearch_str(level);
    }

    let client = SearxngClient::new(config)?;
    let digest = client.search(&params).await?;
    println!("{}", digest);

    Ok(())
}
