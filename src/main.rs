/*
 * Responsibility
 * - tokio runtime entry point
 * - call app::run() (no logic lives here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kopilog::app::run().await
}
