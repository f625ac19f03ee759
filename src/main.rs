//! Merchant proximity service launcher.
//!
//! Binds the HTTP transport to an address and owns the single store
//! instance for the process lifetime. State is memory-only; nothing
//! survives a restart.

use std::process;
use std::sync::{Arc, RwLock};

use clap::Parser;
use merchant_proximity::{serve, MerchantStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "merchant-proximity")]
#[command(about = "In-memory merchant registry with proximity ranking", long_about = None)]
struct Args {
    /// Address to bind, host:port
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let store = Arc::new(RwLock::new(MerchantStore::new()));

    if let Err(e) = serve(store, &args.addr).await {
        eprintln!("Error: failed to serve on {}: {}", args.addr, e);
        process::exit(1);
    }
}
