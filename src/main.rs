//! poke-mcp server entry point: serves the tool surface over stdio.

use poke_mcp::pokeapi::client::PokeApiClient;
use poke_mcp::server::PokeMcpService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout belongs to the MCP transport.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("poke-mcp server starting");

    let client = PokeApiClient::new()?;
    let service = PokeMcpService::new(client);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!(?quit_reason, "poke-mcp server exiting");
    Ok(())
}
