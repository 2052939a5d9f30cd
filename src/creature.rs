//! Domain types for a battle-ready Pokemon snapshot.
//!
//! A `CreatureRecord` is the immutable view of one Pokemon that the battle
//! engine consumes: base stats, types, and a short list of battle-usable
//! moves. Records are produced by the PokeAPI client (or built directly in
//! tests) and are never mutated once constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six base stats, in PokeAPI naming.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(rename = "special-attack")]
    pub special_attack: u32,
    #[serde(rename = "special-defense")]
    pub special_defense: u32,
    pub speed: u32,
}

/// Persistent status conditions the simplified engine models.
///
/// At most one is active per participant at any time; applying a second
/// while one is active is a no-op.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    Paralysis,
    Poison,
    Burn,
}

impl StatusCondition {
    /// Parses a PokeAPI move-meta ailment name. Ailments the engine does not
    /// model (sleep, freeze, confusion, ...) return `None`.
    pub fn from_ailment(name: &str) -> Option<Self> {
        match name {
            "paralysis" => Some(StatusCondition::Paralysis),
            "poison" => Some(StatusCondition::Poison),
            "burn" => Some(StatusCondition::Burn),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCondition::Paralysis => "paralysis",
            StatusCondition::Poison => "poison",
            StatusCondition::Burn => "burn",
        };
        write!(f, "{}", name)
    }
}

/// One move as the battle engine sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub name: String,
    /// Base power; 0 marks a status-only move that deals no damage.
    pub power: u32,
    /// PokeAPI type name (lowercase), e.g. "electric".
    pub move_type: String,
    /// Status condition the move can inflict, if any.
    pub status_effect: Option<StatusCondition>,
    /// Percent chance the status applies on hit. Only meaningful when
    /// `status_effect` is set.
    pub status_chance: u8,
}

impl MoveRecord {
    pub fn damaging(name: &str, power: u32, move_type: &str) -> Self {
        Self {
            name: name.to_string(),
            power,
            move_type: move_type.to_string(),
            status_effect: None,
            status_chance: 0,
        }
    }

    pub fn with_status(mut self, status: StatusCondition, chance: u8) -> Self {
        self.status_effect = Some(status);
        self.status_chance = chance;
        self
    }

    /// True when the move can deal direct damage.
    pub fn is_damaging(&self) -> bool {
        self.power > 0
    }
}

/// Immutable snapshot of one Pokemon for the duration of a battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    /// Lowercase-normalized identifier, as PokeAPI names it.
    pub name: String,
    pub stats: BaseStats,
    /// Type names in slot order, 1-2 entries.
    pub types: Vec<String>,
    /// Battle-usable moves in resolution order, 1-4 entries.
    pub moves: Vec<MoveRecord>,
}

impl CreatureRecord {
    pub fn new(name: &str, stats: BaseStats, types: Vec<String>, moves: Vec<MoveRecord>) -> Self {
        Self {
            name: name.to_lowercase(),
            stats,
            types,
            moves,
        }
    }

    /// True when `move_type` matches one of this creature's own types, which
    /// grants the same-type attack bonus.
    pub fn has_type(&self, move_type: &str) -> bool {
        self.types.iter().any(|t| t == move_type)
    }
}
