//! Engine error types.

use super::pit::PitId;
use super::player::PlayerId;

/// Why a legal-but-disallowed selection was refused.
///
/// Rejections never change board state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("a move is still being sown")]
    Animating,

    #[error("the game is over")]
    GameOver,

    #[error("{pit} is not a playing pit of {player}")]
    NotOwned { pit: PitId, player: PlayerId },

    #[error("{0} is empty")]
    EmptyPit(PitId),
}

/// Errors surfaced at the engine boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid selection: {0}")]
    InvalidSelection(#[from] Rejection),

    #[error("pit index {index} is outside 0..14")]
    InvalidArgument { index: usize },

    #[error("player seat {seat} is outside 0..2")]
    InvalidPlayer { seat: u8 },
}

impl EngineError {
    /// Rejected selections are recoverable; bad indices and seats are caller bugs.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidSelection(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = Rejection::NotOwned {
            pit: PitId::from_raw(8),
            player: PlayerId::FIRST,
        };
        assert_eq!(err.to_string(), "Pit(8) is not a playing pit of Player 1");
        assert_eq!(
            Rejection::EmptyPit(PitId::from_raw(2)).to_string(),
            "Pit(2) is empty"
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err: EngineError = Rejection::GameOver.into();
        assert_eq!(err.to_string(), "invalid selection: the game is over");

        let err = EngineError::InvalidArgument { index: 20 };
        assert_eq!(err.to_string(), "pit index 20 is outside 0..14");

        let err = EngineError::InvalidPlayer { seat: 3 };
        assert_eq!(err.to_string(), "player seat 3 is outside 0..2");
    }

    #[test]
    fn test_recoverable() {
        assert!(EngineError::InvalidSelection(Rejection::Animating).is_recoverable());
        assert!(!EngineError::InvalidArgument { index: 99 }.is_recoverable());
        assert!(!EngineError::InvalidPlayer { seat: 2 }.is_recoverable());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("move_speed must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: move_speed must be > 0");
    }
}
