//! HTTP client over PokeAPI.
//!
//! The client is an explicitly constructed dependency: the tool surface is
//! handed one instance at startup, and the battle engine never sees it —
//! simulations run over fully resolved records only.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::creature::CreatureRecord;
use crate::errors::{ApiError, ApiResult};
use crate::pokeapi::wire::{
    battle_move, base_stats_map, english_effect, flatten_evolution_chain, type_names, typed_stats,
    AbilityResponse, EvolutionChainResponse, MoveResponse, PokemonResponse, SpeciesResponse,
};
use crate::pokeapi::{CreatureInfo, NamedEffect};

pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Upstream requests that hang are cut off here; the caller sees a network
/// error instead of a stalled tool call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Moves carried in the info payload, matching the upstream "first 10 for
/// brevity" behavior.
const INFO_MOVE_LIMIT: usize = 10;

/// How many of a Pokemon's listed moves are scanned when resolving a battle
/// record, and how many battle-usable ones are kept.
const RECORD_MOVE_SCAN: usize = 10;
const RECORD_MOVE_LIMIT: usize = 4;

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: POKEAPI_BASE_URL.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, subject: &str) -> ApiResult<T> {
        debug!(url, subject, "fetching from pokeapi");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(subject.to_string()));
        }
        Ok(response.error_for_status()?.json::<T>().await?)
    }

    async fn fetch_pokemon(&self, name: &str) -> ApiResult<PokemonResponse> {
        let name = name.to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url, &name).await
    }

    /// Fetches and aggregates everything `get_pokemon_info` reports: stats,
    /// types, abilities and moves with English effect text, and the
    /// evolution chain.
    pub async fn get_pokemon_info(&self, name: &str) -> ApiResult<CreatureInfo> {
        let pokemon = self.fetch_pokemon(name).await?;

        let mut abilities = Vec::new();
        for entry in &pokemon.abilities {
            let ability: AbilityResponse =
                self.get_json(&entry.ability.url, &entry.ability.name).await?;
            abilities.push(NamedEffect {
                name: ability.name,
                effect: english_effect(&ability.effect_entries),
            });
        }

        let mut moves = Vec::new();
        for entry in pokemon.moves.iter().take(INFO_MOVE_LIMIT) {
            let move_: MoveResponse = self.get_json(&entry.move_.url, &entry.move_.name).await?;
            moves.push(NamedEffect {
                name: move_.name,
                effect: english_effect(&move_.effect_entries),
            });
        }

        let species: SpeciesResponse = self.get_json(&pokemon.species.url, &pokemon.name).await?;
        let evolution: EvolutionChainResponse = self
            .get_json(&species.evolution_chain.url, &pokemon.name)
            .await?;

        Ok(CreatureInfo {
            base_stats: base_stats_map(&pokemon),
            types: type_names(&pokemon),
            evolution_chain: flatten_evolution_chain(&evolution.chain),
            name: pokemon.name,
            id: pokemon.id,
            abilities,
            moves,
        })
    }

    /// Resolves a battle-ready snapshot: typed stats, types, and up to four
    /// battle-usable moves out of the first ten the Pokemon lists.
    pub async fn resolve_record(&self, name: &str) -> ApiResult<CreatureRecord> {
        let pokemon = self.fetch_pokemon(name).await?;
        let stats = typed_stats(&pokemon)?;
        let types = type_names(&pokemon);

        let mut moves = Vec::new();
        for entry in pokemon.moves.iter().take(RECORD_MOVE_SCAN) {
            if moves.len() == RECORD_MOVE_LIMIT {
                break;
            }
            let move_: MoveResponse = self.get_json(&entry.move_.url, &entry.move_.name).await?;
            if let Some(record) = battle_move(&move_) {
                moves.push(record);
            }
        }

        Ok(CreatureRecord::new(&pokemon.name, stats, types, moves))
    }
}
