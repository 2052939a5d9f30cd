//! Turn-based battle simulation over two resolved creature records.
//!
//! `simulate` is a pure function: it owns its `BattleState` for the duration
//! of one call, performs no I/O, and never mutates its inputs. All chance
//! flows through the injected `BattleRng`, so a scripted rng makes every
//! branch reachable from tests.
//!
//! Fixed policies, chosen for reproducibility:
//! - each participant always uses the first move in its move list;
//! - speed ties resolve in favor of the first participant;
//! - after `TURN_LIMIT` turns with both sides standing, the battle is a draw.

use crate::battle::state::{BattleEvent, BattlePhase, BattleRng, BattleState, EventBus};
use crate::battle::stats::{
    damage_for_move, effective_speed, residual_damage, PARALYSIS_PROC_CHANCE,
};
use crate::creature::{CreatureRecord, StatusCondition};
use crate::errors::{EngineError, EngineResult};

/// Hard ceiling on simulated turns, guarding liveness when neither side can
/// bring the other to 0 hp.
pub const TURN_LIMIT: u32 = 100;

/// The finished battle: the full event stream plus the winner's name, or
/// `None` for a stalemate draw.
#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub events: EventBus,
    pub winner: Option<String>,
}

impl BattleOutcome {
    /// The human-readable battle log, one line per event.
    pub fn log(&self) -> Vec<String> {
        self.events.to_log()
    }
}

/// Runs a battle between two records to completion.
///
/// Fails with `InvalidParticipant` before any turn is simulated when a
/// record has no moves or no hp; a stalemate is a normal `Ok` outcome with
/// `winner: None`.
pub fn simulate(
    first: &CreatureRecord,
    second: &CreatureRecord,
    mut rng: BattleRng,
) -> EngineResult<BattleOutcome> {
    validate_participant(first)?;
    validate_participant(second)?;

    let mut state = BattleState::new(first, second);

    while state.phase == BattlePhase::InProgress && state.turn_number <= TURN_LIMIT {
        state.events.push(BattleEvent::TurnStarted {
            turn_number: state.turn_number,
        });

        for index in turn_order(&state) {
            if state.phase != BattlePhase::InProgress {
                break;
            }
            perform_action(&mut state, index, &mut rng);
        }

        if state.phase == BattlePhase::InProgress {
            apply_residual_damage(&mut state);
        }

        state.events.push(BattleEvent::TurnEnded);
        state.turn_number += 1;
    }

    if state.phase == BattlePhase::InProgress {
        state.phase = BattlePhase::Draw;
    }

    let winner = state.winner_name();
    state.events.push(BattleEvent::BattleEnded {
        winner: winner.clone(),
    });

    Ok(BattleOutcome {
        events: state.events,
        winner,
    })
}

fn validate_participant(record: &CreatureRecord) -> EngineResult<()> {
    if record.stats.hp == 0 {
        return Err(EngineError::InvalidParticipant {
            name: record.name.clone(),
            reason: "it has no hp".to_string(),
        });
    }
    if record.moves.is_empty() {
        return Err(EngineError::InvalidParticipant {
            name: record.name.clone(),
            reason: "it has no usable moves".to_string(),
        });
    }
    Ok(())
}

/// Action order for the turn: strictly greater effective speed goes first,
/// ties go to the first participant.
fn turn_order(state: &BattleState) -> [usize; 2] {
    let first_speed = effective_speed(&state.participants[0]);
    let second_speed = effective_speed(&state.participants[1]);
    if second_speed > first_speed {
        [1, 0]
    } else {
        [0, 1]
    }
}

/// Executes one participant's action: paralysis check, move use, damage,
/// status application, faint transition.
fn perform_action(state: &mut BattleState, actor_index: usize, rng: &mut BattleRng) {
    let defender_index = BattleState::opponent_of(actor_index);

    if state.participants[actor_index].is_fainted() {
        return;
    }

    let actor_name = state.participants[actor_index].name().to_string();

    if state.participants[actor_index].status == Some(StatusCondition::Paralysis) {
        let roll = rng.percent_roll("paralysis check");
        if roll <= PARALYSIS_PROC_CHANCE {
            state.events.push(BattleEvent::FullyParalyzed { actor: actor_name });
            return;
        }
    }

    // Fixed selection policy: always the first move.
    let move_ = state.participants[actor_index].record.moves[0].clone();
    let damage = damage_for_move(
        state.participants[actor_index].record,
        state.participants[defender_index].record,
        &move_,
    );

    state.events.push(BattleEvent::MoveUsed {
        actor: actor_name,
        move_name: move_.name.clone(),
    });

    if move_.is_damaging() {
        let remaining_hp = state.participants[defender_index].take_damage(damage);
        state.events.push(BattleEvent::DamageDealt {
            target: state.participants[defender_index].name().to_string(),
            damage,
            remaining_hp,
        });
    }

    if let Some(status) = move_.status_effect {
        if !state.participants[defender_index].is_fainted() {
            let roll = rng.percent_roll("status chance");
            if roll <= move_.status_chance && state.participants[defender_index].try_apply_status(status)
            {
                state.events.push(BattleEvent::StatusApplied {
                    target: state.participants[defender_index].name().to_string(),
                    status,
                });
            }
        }
    }

    transition_if_fainted(state, defender_index);
}

/// End-of-turn chip damage from poison and burn, applied to both standing
/// participants in index order.
fn apply_residual_damage(state: &mut BattleState) {
    for index in 0..2 {
        if state.phase != BattlePhase::InProgress {
            break;
        }
        let participant = &state.participants[index];
        if participant.is_fainted() {
            continue;
        }
        let Some(status) = participant.status else {
            continue;
        };
        let Some(damage) = residual_damage(status, participant.record.stats.hp) else {
            continue;
        };

        let remaining_hp = state.participants[index].take_damage(damage);
        state.events.push(BattleEvent::ResidualDamage {
            target: state.participants[index].name().to_string(),
            status,
            damage,
            remaining_hp,
        });
        transition_if_fainted(state, index);
    }
}

/// The only transition out of `InProgress` during a turn: a faint awards the
/// battle to the opponent.
fn transition_if_fainted(state: &mut BattleState, index: usize) {
    if state.phase != BattlePhase::InProgress || !state.participants[index].is_fainted() {
        return;
    }
    state.events.push(BattleEvent::Fainted {
        target: state.participants[index].name().to_string(),
    });
    state.phase = BattlePhase::Won(BattleState::opponent_of(index));
}
