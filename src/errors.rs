//! Error taxonomy for the poke-mcp crate.
//!
//! Upstream fetch failures (`ApiError`) are surfaced verbatim as the tool
//! response's `error` field without invoking the battle engine. The engine
//! itself performs no I/O and can only reject unusable participants; a
//! stalemate is a normal outcome (a draw), not an error.

use thiserror::Error;

/// Failures while fetching or reshaping PokeAPI data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested name did not resolve upstream.
    #[error("pokemon '{0}' was not found")]
    NotFound(String),

    /// The upstream request failed (connect, timeout, non-404 status, body).
    #[error("pokeapi request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream payload was missing a field this crate relies on.
    #[error("malformed pokeapi payload: {0}")]
    Malformed(String),
}

/// Failures raised by the battle engine before simulation starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The resolved record lacks the minimum battle-usable data.
    #[error("'{name}' cannot battle: {reason}")]
    InvalidParticipant { name: String, reason: String },
}

pub type ApiResult<T> = Result<T, ApiError>;
pub type EngineResult<T> = Result<T, EngineError>;
