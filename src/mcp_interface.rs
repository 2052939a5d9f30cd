//! Response shaping between domain results and the JSON payloads the MCP
//! tools return.
//!
//! Every upstream or engine failure maps onto an `{"error": ...}` object
//! rather than a protocol-level error, mirroring how the tools' callers
//! consume them. These functions are pure so the propagation rules are
//! testable without a network or a live server.

use serde_json::{json, Value};

use crate::battle::engine::simulate;
use crate::battle::state::BattleRng;
use crate::creature::CreatureRecord;
use crate::errors::ApiResult;
use crate::pokeapi::CreatureInfo;

/// Winner string reported when the turn ceiling forces a draw.
pub const DRAW_WINNER: &str = "draw";

/// An `{"error": ...}` payload.
pub fn error_payload(message: impl ToString) -> Value {
    json!({ "error": message.to_string() })
}

/// Payload for `get_pokemon_info`: the info object, or an error object when
/// the upstream fetch failed.
pub fn creature_info_payload(result: ApiResult<CreatureInfo>) -> Value {
    match result {
        Ok(info) => serde_json::to_value(&info).unwrap_or_else(|e| error_payload(e)),
        Err(err) => error_payload(err),
    }
}

/// Payload for `simulate_battle`.
///
/// A fetch failure for either participant aborts before the engine runs, so
/// the reply carries an `error` field and no battle log. A stalemate is a
/// normal reply with the draw indicator as its winner.
pub fn battle_payload(
    records: ApiResult<(CreatureRecord, CreatureRecord)>,
    rng: BattleRng,
) -> Value {
    let (first, second) = match records {
        Ok(pair) => pair,
        Err(err) => return error_payload(err),
    };

    match simulate(&first, &second, rng) {
        Ok(outcome) => json!({
            "pokemon1": first.name,
            "pokemon2": second.name,
            "battle_log": outcome.log(),
            "winner": outcome.winner.unwrap_or_else(|| DRAW_WINNER.to_string()),
        }),
        Err(err) => error_payload(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{BaseStats, MoveRecord};
    use crate::errors::ApiError;
    use pretty_assertions::assert_eq;

    fn record(name: &str, hp: u32, speed: u32) -> CreatureRecord {
        CreatureRecord::new(
            name,
            BaseStats {
                hp,
                attack: 50,
                defense: 50,
                special_attack: 50,
                special_defense: 50,
                speed,
            },
            vec!["normal".to_string()],
            vec![MoveRecord::damaging("tackle", 40, "normal")],
        )
    }

    #[test]
    fn fetch_failure_yields_error_and_no_battle_log() {
        let payload = battle_payload(
            Err(ApiError::NotFound("missingno".to_string())),
            BattleRng::new_for_test(vec![]),
        );
        assert_eq!(
            payload["error"],
            json!("pokemon 'missingno' was not found")
        );
        assert!(payload.get("battle_log").is_none());
        assert!(payload.get("winner").is_none());
    }

    #[test]
    fn successful_battle_reports_log_and_winner() {
        let records = Ok((record("machop", 100, 60), record("vulpix", 40, 40)));
        let payload = battle_payload(records, BattleRng::new_for_test(vec![]));

        assert_eq!(payload["pokemon1"], json!("machop"));
        assert_eq!(payload["pokemon2"], json!("vulpix"));
        assert_eq!(payload["winner"], json!("machop"));
        assert!(!payload["battle_log"].as_array().unwrap().is_empty());
        assert!(payload.get("error").is_none());
    }

    #[test]
    fn moveless_participant_surfaces_engine_error() {
        let mut moveless = record("unown", 50, 50);
        moveless.moves.clear();
        let payload = battle_payload(
            Ok((record("rattata", 50, 50), moveless)),
            BattleRng::new_for_test(vec![]),
        );
        assert_eq!(
            payload["error"],
            json!("'unown' cannot battle: it has no usable moves")
        );
        assert!(payload.get("battle_log").is_none());
    }

    #[test]
    fn stalemate_reports_draw_winner() {
        let mut first = record("magikarp", 100, 50);
        first.moves = vec![MoveRecord::damaging("splash", 0, "normal")];
        let mut second = record("feebas", 100, 50);
        second.moves = vec![MoveRecord::damaging("splash", 0, "normal")];

        let payload = battle_payload(Ok((first, second)), BattleRng::new_for_test(vec![]));
        assert_eq!(payload["winner"], json!(DRAW_WINNER));
    }

    #[test]
    fn info_payload_serializes_or_propagates_error() {
        let info = CreatureInfo {
            name: "pikachu".to_string(),
            id: 25,
            base_stats: [("hp".to_string(), 35)].into_iter().collect(),
            types: vec!["electric".to_string()],
            abilities: vec![],
            moves: vec![],
            evolution_chain: vec!["pichu".to_string(), "pikachu".to_string()],
        };
        let payload = creature_info_payload(Ok(info));
        assert_eq!(payload["name"], json!("pikachu"));
        assert_eq!(payload["base_stats"]["hp"], json!(35));

        let err_payload =
            creature_info_payload(Err(ApiError::NotFound("missingno".to_string())));
        assert_eq!(err_payload["error"], json!("pokemon 'missingno' was not found"));
    }
}
