use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::creature::{CreatureRecord, StatusCondition};

/// Where the battle currently stands. Every transition out of `InProgress`
/// is terminal; the engine checks the phase before each action so a faint
/// mid-turn cancels the remaining action.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    InProgress,
    /// Index of the winning participant (0 or 1).
    Won(usize),
    /// Turn ceiling reached with both participants standing.
    Draw,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded,
    MoveUsed {
        actor: String,
        move_name: String,
    },
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    FullyParalyzed {
        actor: String,
    },
    StatusApplied {
        target: String,
        status: StatusCondition,
    },
    ResidualDamage {
        target: String,
        status: StatusCondition,
        damage: u32,
        remaining_hp: u32,
    },
    Fainted {
        target: String,
    },
    BattleEnded {
        winner: Option<String>,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable log line. `TurnEnded` maps to
    /// an empty line so turns stay visually separated in the battle log.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::TurnStarted { turn_number } => format!("=== Turn {} ===", turn_number),
            BattleEvent::TurnEnded => String::new(),
            BattleEvent::MoveUsed { actor, move_name } => {
                format!("{} used {}!", capitalize(actor), move_name)
            }
            BattleEvent::DamageDealt { target, damage, .. } => {
                format!("{} took {} damage!", capitalize(target), damage)
            }
            BattleEvent::FullyParalyzed { actor } => {
                format!("{} is fully paralyzed! It can't move!", capitalize(actor))
            }
            BattleEvent::StatusApplied { target, status } => {
                let applied = match status {
                    StatusCondition::Paralysis => "is paralyzed! It may be unable to move!",
                    StatusCondition::Poison => "was poisoned!",
                    StatusCondition::Burn => "was burned!",
                };
                format!("{} {}", capitalize(target), applied)
            }
            BattleEvent::ResidualDamage {
                target,
                status,
                damage,
                ..
            } => format!(
                "{} is hurt by its {}! ({} damage)",
                capitalize(target),
                status,
                damage
            ),
            BattleEvent::Fainted { target } => format!("{} fainted!", capitalize(target)),
            BattleEvent::BattleEnded { winner } => match winner {
                Some(name) => format!("{} has won the battle!", capitalize(name)),
                None => "The battle ended in a draw!".to_string(),
            },
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Append-only collector for battle events, kept in emission order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Renders every event into the human-readable battle log.
    pub fn to_log(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }
}

/// Random source for the engine's percent rolls (paralysis proc, status
/// chance). Scripted values make every branch reachable from tests; outside
/// tests a seeded PRNG drives the rolls.
#[derive(Debug, Clone)]
pub struct BattleRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Scripted(VecDeque<u8>),
    Seeded(StdRng),
}

impl BattleRng {
    /// Rolls come from `outcomes` in order; running out panics with the
    /// reason of the roll that exhausted the script.
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted(outcomes.into()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Returns a roll in 1..=100.
    pub fn percent_roll(&mut self, reason: &str) -> u8 {
        match &mut self.source {
            RngSource::Scripted(outcomes) => {
                let outcome = outcomes.pop_front().unwrap_or_else(|| {
                    panic!(
                        "BattleRng script exhausted! Tried to roll for: '{}'. Need more values.",
                        reason
                    )
                });
                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);
                outcome
            }
            RngSource::Seeded(rng) => rng.random_range(1..=100),
        }
    }
}

/// Mutable per-battle wrapper around an immutable `CreatureRecord`.
#[derive(Debug, Clone)]
pub struct BattleParticipant<'a> {
    pub record: &'a CreatureRecord,
    pub current_hp: u32,
    pub status: Option<StatusCondition>,
}

impl<'a> BattleParticipant<'a> {
    pub fn new(record: &'a CreatureRecord) -> Self {
        Self {
            record,
            current_hp: record.stats.hp,
            status: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Reduces current hp, flooring at 0, and returns the remaining hp.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }

    /// Sets `status` only if no status is active. Returns whether it stuck.
    pub fn try_apply_status(&mut self, status: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }
}

/// Full state of one simulation, exclusively owned by the engine for the
/// lifetime of a `simulate` call.
#[derive(Debug)]
pub struct BattleState<'a> {
    pub participants: [BattleParticipant<'a>; 2],
    pub turn_number: u32,
    pub phase: BattlePhase,
    pub events: EventBus,
}

impl<'a> BattleState<'a> {
    pub fn new(first: &'a CreatureRecord, second: &'a CreatureRecord) -> Self {
        Self {
            participants: [BattleParticipant::new(first), BattleParticipant::new(second)],
            turn_number: 1,
            phase: BattlePhase::InProgress,
            events: EventBus::new(),
        }
    }

    pub fn opponent_of(index: usize) -> usize {
        1 - index
    }

    pub fn winner_name(&self) -> Option<String> {
        match self.phase {
            BattlePhase::Won(index) => Some(self.participants[index].name().to_string()),
            _ => None,
        }
    }
}
