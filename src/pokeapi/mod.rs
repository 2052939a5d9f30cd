//! PokeAPI access: wire types, reshaping, and the HTTP client.

pub mod client;
pub mod wire;

use std::collections::BTreeMap;

use serde::Serialize;

/// A name plus its resolved English effect text, used for both abilities
/// and moves in the info payload.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NamedEffect {
    pub name: String,
    pub effect: Option<String>,
}

/// Aggregated descriptive data for one Pokemon, as `get_pokemon_info`
/// returns it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatureInfo {
    pub name: String,
    pub id: u32,
    pub base_stats: BTreeMap<String, u32>,
    pub types: Vec<String>,
    pub abilities: Vec<NamedEffect>,
    pub moves: Vec<NamedEffect>,
    pub evolution_chain: Vec<String>,
}
