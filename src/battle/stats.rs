//! Stat and damage math for the simplified battle model.
//!
//! The constants here are the documented, fixed choices that make the
//! simulation reproducible: STAB is x1.5, paralysis halves speed and
//! procs 25% of the time, poison and burn chip max_hp/8 and max_hp/16
//! per turn, and damage scales as power * attack / defense / 5.

use crate::battle::state::BattleParticipant;
use crate::creature::{CreatureRecord, MoveRecord, StatusCondition};

/// Chance (percent) that a paralyzed participant loses its action.
pub const PARALYSIS_PROC_CHANCE: u8 = 25;

/// Damage formula scale divisor.
const DAMAGE_SCALE: u32 = 5;

/// Move category in the Gen-1 sense: the move's type alone decides whether
/// it runs off attack/defense or special-attack/special-defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

const SPECIAL_TYPES: [&str; 8] = [
    "fire", "water", "grass", "electric", "ice", "psychic", "dragon", "dark",
];

pub fn move_category(move_: &MoveRecord) -> MoveCategory {
    if !move_.is_damaging() {
        return MoveCategory::Status;
    }
    if SPECIAL_TYPES.contains(&move_.move_type.as_str()) {
        MoveCategory::Special
    } else {
        MoveCategory::Physical
    }
}

/// Base speed, halved while paralyzed.
pub fn effective_speed(participant: &BattleParticipant) -> u32 {
    let base = participant.record.stats.speed;
    match participant.status {
        Some(StatusCondition::Paralysis) => base / 2,
        _ => base,
    }
}

fn attack_stat(record: &CreatureRecord, category: MoveCategory) -> u32 {
    match category {
        MoveCategory::Physical => record.stats.attack,
        MoveCategory::Special => record.stats.special_attack,
        MoveCategory::Status => 0,
    }
}

fn defense_stat(record: &CreatureRecord, category: MoveCategory) -> u32 {
    match category {
        MoveCategory::Physical => record.stats.defense,
        MoveCategory::Special => record.stats.special_defense,
        MoveCategory::Status => 0,
    }
}

/// Damage a move deals from `attacker` to `defender`.
///
/// Status-only moves deal 0. Damaging moves deal
/// `power * attack / max(defense, 1) / 5`, times 3/2 when the move's type
/// matches one of the attacker's own types (STAB), floored, minimum 1.
pub fn damage_for_move(
    attacker: &CreatureRecord,
    defender: &CreatureRecord,
    move_: &MoveRecord,
) -> u32 {
    let category = move_category(move_);
    if category == MoveCategory::Status {
        return 0;
    }

    let attack = attack_stat(attacker, category);
    let defense = defense_stat(defender, category).max(1);

    let mut damage = move_.power * attack / defense / DAMAGE_SCALE;
    if attacker.has_type(&move_.move_type) {
        damage = damage * 3 / 2;
    }
    damage.max(1)
}

/// End-of-turn chip damage for a lingering status, if any.
pub fn residual_damage(status: StatusCondition, max_hp: u32) -> Option<u32> {
    match status {
        StatusCondition::Poison => Some((max_hp / 8).max(1)),
        StatusCondition::Burn => Some((max_hp / 16).max(1)),
        StatusCondition::Paralysis => None,
    }
}
