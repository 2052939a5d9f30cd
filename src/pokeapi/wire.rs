//! Serde mirror of the PokeAPI payload subset this crate consumes, plus the
//! pure reshaping from wire form into domain types.
//!
//! Everything here is network-free so the reshaping can be tested against
//! canned JSON.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::creature::{BaseStats, MoveRecord, StatusCondition};
use crate::errors::{ApiError, ApiResult};

/// A `{name, url}` reference, PokeAPI's building block.
#[derive(Deserialize, Debug, Clone)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub stats: Vec<StatEntry>,
    pub types: Vec<TypeEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
    pub species: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TypeEntry {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbilityEntry {
    pub ability: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AbilityResponse {
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MoveResponse {
    pub name: String,
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub type_: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    pub meta: Option<MoveMeta>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EffectEntry {
    pub effect: String,
    pub language: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MoveMeta {
    pub ailment: NamedResource,
    #[serde(default)]
    pub ailment_chance: u8,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SpeciesResponse {
    pub evolution_chain: ApiResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Picks the English effect text out of a set of effect entries.
pub fn english_effect(entries: &[EffectEntry]) -> Option<String> {
    entries
        .iter()
        .find(|e| e.language.name == "en")
        .map(|e| e.effect.clone())
}

/// Stat-name -> base-stat map, keyed by PokeAPI stat names.
pub fn base_stats_map(pokemon: &PokemonResponse) -> BTreeMap<String, u32> {
    pokemon
        .stats
        .iter()
        .map(|s| (s.stat.name.clone(), s.base_stat))
        .collect()
}

/// Type names in slot order.
pub fn type_names(pokemon: &PokemonResponse) -> Vec<String> {
    let mut entries: Vec<_> = pokemon.types.iter().collect();
    entries.sort_by_key(|t| t.slot);
    entries.into_iter().map(|t| t.type_.name.clone()).collect()
}

/// Builds the typed battle stats, failing when a stat the engine relies on
/// is absent from the payload.
pub fn typed_stats(pokemon: &PokemonResponse) -> ApiResult<BaseStats> {
    let map = base_stats_map(pokemon);
    let get = |key: &str| {
        map.get(key)
            .copied()
            .ok_or_else(|| ApiError::Malformed(format!("missing stat '{}'", key)))
    };
    Ok(BaseStats {
        hp: get("hp")?,
        attack: get("attack")?,
        defense: get("defense")?,
        special_attack: get("special-attack")?,
        special_defense: get("special-defense")?,
        speed: get("speed")?,
    })
}

/// Converts a full move payload into a battle-usable `MoveRecord`.
///
/// Returns `None` for moves the engine cannot use: no power and no modeled
/// ailment. An `ailment_chance` of 0 on a status move means the ailment
/// always applies, which is how PokeAPI encodes moves like thunder-wave.
pub fn battle_move(move_: &MoveResponse) -> Option<MoveRecord> {
    let power = move_.power.unwrap_or(0);
    let status = move_
        .meta
        .as_ref()
        .and_then(|m| StatusCondition::from_ailment(&m.ailment.name));
    let status_chance = match (&move_.meta, status) {
        (Some(meta), Some(_)) => {
            if meta.ailment_chance == 0 {
                100
            } else {
                meta.ailment_chance
            }
        }
        _ => 0,
    };

    if power == 0 && status.is_none() {
        return None;
    }

    Some(MoveRecord {
        name: move_.name.clone(),
        power,
        move_type: move_.type_.name.clone(),
        status_effect: status,
        status_chance,
    })
}

/// Walks the first branch of an evolution chain into a flat name list, the
/// same way the info payload presents it.
pub fn flatten_evolution_chain(chain: &ChainLink) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = Some(chain);
    while let Some(link) = current {
        names.push(link.species.name.clone());
        current = link.evolves_to.first();
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}},
            {"base_stat": 40, "effort": 0, "stat": {"name": "defense", "url": "https://pokeapi.co/api/v2/stat/3/"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/"}},
            {"base_stat": 50, "effort": 0, "stat": {"name": "special-defense", "url": "https://pokeapi.co/api/v2/stat/5/"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
        ],
        "abilities": [
            {"is_hidden": false, "slot": 1, "ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}}
        ],
        "moves": [
            {"move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"}},
            {"move": {"name": "growl", "url": "https://pokeapi.co/api/v2/move/45/"}}
        ],
        "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
    }"#;

    const THUNDER_SHOCK_JSON: &str = r#"{
        "name": "thunder-shock",
        "power": 40,
        "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"},
        "effect_entries": [
            {"effect": "Inflige des degats.", "language": {"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"}},
            {"effect": "Has a 10% chance to paralyze the target.", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
        ],
        "meta": {"ailment": {"name": "paralysis", "url": "https://pokeapi.co/api/v2/move-ailment/1/"}, "ailment_chance": 10}
    }"#;

    const THUNDER_WAVE_JSON: &str = r#"{
        "name": "thunder-wave",
        "power": null,
        "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"},
        "effect_entries": [],
        "meta": {"ailment": {"name": "paralysis", "url": "https://pokeapi.co/api/v2/move-ailment/1/"}, "ailment_chance": 0}
    }"#;

    const GROWL_JSON: &str = r#"{
        "name": "growl",
        "power": null,
        "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"},
        "effect_entries": [],
        "meta": {"ailment": {"name": "none", "url": "https://pokeapi.co/api/v2/move-ailment/0/"}, "ailment_chance": 0}
    }"#;

    const CHAIN_JSON: &str = r#"{
        "chain": {
            "species": {"name": "pichu", "url": "https://pokeapi.co/api/v2/pokemon-species/172/"},
            "evolves_to": [{
                "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
                "evolves_to": [{
                    "species": {"name": "raichu", "url": "https://pokeapi.co/api/v2/pokemon-species/26/"},
                    "evolves_to": []
                }]
            }]
        }
    }"#;

    #[test]
    fn pokemon_payload_reshapes_into_stats_and_types() {
        let pokemon: PokemonResponse = serde_json::from_str(PIKACHU_JSON).unwrap();
        assert_eq!(pokemon.id, 25);

        let stats = typed_stats(&pokemon).unwrap();
        assert_eq!(stats.hp, 35);
        assert_eq!(stats.special_attack, 50);
        assert_eq!(stats.speed, 90);

        assert_eq!(type_names(&pokemon), vec!["electric".to_string()]);
        assert_eq!(base_stats_map(&pokemon)["attack"], 55);
    }

    #[test]
    fn missing_stat_is_a_malformed_payload() {
        let mut pokemon: PokemonResponse = serde_json::from_str(PIKACHU_JSON).unwrap();
        pokemon.stats.retain(|s| s.stat.name != "speed");
        let err = typed_stats(&pokemon).unwrap_err();
        assert!(err.to_string().contains("missing stat 'speed'"));
    }

    #[test]
    fn english_effect_is_selected_by_language() {
        let move_: MoveResponse = serde_json::from_str(THUNDER_SHOCK_JSON).unwrap();
        assert_eq!(
            english_effect(&move_.effect_entries).as_deref(),
            Some("Has a 10% chance to paralyze the target.")
        );
        let wave: MoveResponse = serde_json::from_str(THUNDER_WAVE_JSON).unwrap();
        assert_eq!(english_effect(&wave.effect_entries), None);
    }

    #[test]
    fn damaging_move_with_rider_keeps_its_chance() {
        let move_: MoveResponse = serde_json::from_str(THUNDER_SHOCK_JSON).unwrap();
        let record = battle_move(&move_).unwrap();
        assert_eq!(record.power, 40);
        assert_eq!(record.move_type, "electric");
        assert_eq!(record.status_effect, Some(StatusCondition::Paralysis));
        assert_eq!(record.status_chance, 10);
    }

    #[test]
    fn pure_status_move_gets_a_guaranteed_chance() {
        let move_: MoveResponse = serde_json::from_str(THUNDER_WAVE_JSON).unwrap();
        let record = battle_move(&move_).unwrap();
        assert_eq!(record.power, 0);
        assert_eq!(record.status_effect, Some(StatusCondition::Paralysis));
        assert_eq!(record.status_chance, 100);
    }

    #[test]
    fn unusable_move_is_dropped() {
        let move_: MoveResponse = serde_json::from_str(GROWL_JSON).unwrap();
        assert_eq!(battle_move(&move_), None);
    }

    #[test]
    fn evolution_chain_flattens_first_branch() {
        let chain: EvolutionChainResponse = serde_json::from_str(CHAIN_JSON).unwrap();
        assert_eq!(
            flatten_evolution_chain(&chain.chain),
            vec!["pichu".to_string(), "pikachu".to_string(), "raichu".to_string()]
        );
    }
}
