//! Placehub Service Entry Point
//!
//! This is the main entry point for the placehub service. It initializes
//! configuration, storage, and the router, then starts the HTTP server.

use placehub::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
