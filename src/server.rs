//! The MCP tool surface: `get_pokemon_info` and `simulate_battle` over the
//! official Rust SDK (rmcp).

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ErrorData as McpError},
    schemars, tool, tool_handler, tool_router, ServerHandler,
};
use serde::Deserialize;

use crate::battle::state::BattleRng;
use crate::creature::CreatureRecord;
use crate::errors::ApiResult;
use crate::mcp_interface::{battle_payload, creature_info_payload};
use crate::pokeapi::client::PokeApiClient;

#[derive(Debug, Clone)]
pub struct PokeMcpService {
    tool_router: ToolRouter<PokeMcpService>,
    client: PokeApiClient,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonInfoRequest {
    #[schemars(description = "The name of the Pokemon to get information about")]
    pub pokemon_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimulateBattleRequest {
    #[schemars(description = "Name of the first Pokemon")]
    pub pokemon1: String,
    #[schemars(description = "Name of the second Pokemon")]
    pub pokemon2: String,
}

#[tool_router]
impl PokeMcpService {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    #[tool(
        description = "Get comprehensive information about a Pokemon, including base stats, types, abilities, moves (with effects), and evolution information"
    )]
    async fn get_pokemon_info(
        &self,
        Parameters(request): Parameters<PokemonInfoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.client.get_pokemon_info(&request.pokemon_name).await;
        let payload = creature_info_payload(result);
        Ok(CallToolResult::success(vec![Content::text(
            payload.to_string(),
        )]))
    }

    #[tool(
        description = "Simulate a simplified turn-based battle between two Pokemon and return the battle log and winner"
    )]
    async fn simulate_battle(
        &self,
        Parameters(request): Parameters<SimulateBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let records = self
            .resolve_pair(&request.pokemon1, &request.pokemon2)
            .await;
        let payload = battle_payload(records, BattleRng::new_random());
        Ok(CallToolResult::success(vec![Content::text(
            payload.to_string(),
        )]))
    }
}

impl PokeMcpService {
    /// Resolves both participants up front; the first fetch failure aborts
    /// so the battle engine is never invoked on partial data.
    async fn resolve_pair(
        &self,
        first: &str,
        second: &str,
    ) -> ApiResult<(CreatureRecord, CreatureRecord)> {
        let first = self.client.resolve_record(first).await?;
        let second = self.client.resolve_record(second).await?;
        Ok((first, second))
    }
}

#[tool_handler]
impl ServerHandler for PokeMcpService {}
