//! Error types for board construction and move execution.

use crate::game::Coord;

/// Why a board configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Arm thickness is not a positive odd number, or its grid does not fit in
    /// `i32` coordinates or in memory.
    #[error(
        "arm thickness must be a positive odd number whose grid fits in memory (at most {max}), got {0}",
        max = crate::game::MAX_ARM_THICKNESS
    )]
    ArmThickness(i32),

    /// The requested empty start slot is not part of the playable board.
    #[error("invalid empty cell position {0}")]
    StartPosition(Coord),
}

/// Errors raised by the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The board could not be constructed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A move failed one of the legality conditions. The board is untouched.
    #[error("illegal move from {from} to {to}")]
    IllegalMove {
        /// Slot the marble would have jumped from.
        from: Coord,
        /// Slot the marble would have landed on.
        to: Coord,
    },
}

/// Result type for board operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_thickness_display() {
        let err = GameError::from(ConfigError::ArmThickness(4));
        assert_eq!(
            err.to_string(),
            "invalid configuration: arm thickness must be a positive odd number \
             whose grid fits in memory (at most 1073741823), got 4"
        );
    }

    #[test]
    fn test_start_position_display() {
        let err = GameError::from(ConfigError::StartPosition(Coord::new(0, 0)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: invalid empty cell position (0, 0)"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = GameError::IllegalMove {
            from: Coord::new(5, 3),
            to: Coord::new(3, 3),
        };
        assert_eq!(err.to_string(), "illegal move from (5, 3) to (3, 3)");
    }
}
