//! poke-mcp
//!
//! An MCP server backed by PokeAPI: one tool aggregates descriptive data for
//! a named Pokemon, the other runs a simplified, reproducible turn-based
//! battle simulation between two of them.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod creature;
pub mod errors;
pub mod mcp_interface;
pub mod pokeapi;
pub mod server;

// --- PUBLIC API RE-EXPORTS ---

// Core battle engine function and outcome.
pub use battle::engine::{simulate, BattleOutcome, TURN_LIMIT};
pub use battle::state::{BattleEvent, BattlePhase, BattleRng, BattleState};

// Battle input types.
pub use creature::{BaseStats, CreatureRecord, MoveRecord, StatusCondition};

// PokeAPI access.
pub use pokeapi::client::PokeApiClient;
pub use pokeapi::{CreatureInfo, NamedEffect};

// Crate-specific error and result types.
pub use errors::{ApiError, ApiResult, EngineError, EngineResult};
