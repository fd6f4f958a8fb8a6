//! nearstay CLI entry point
//!
//! Nearby-listing finder - CLI + web app

use nearstay::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
