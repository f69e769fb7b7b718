/// Rule and input errors raised by the board and the console.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The position is outside 1-9 or its cell is already taken.
    #[display("Invalid move: {}", _0)]
    InvalidMove(String),

    /// Sanitized input had no digits left in it.
    #[display("Input must contain at least one digit")]
    NoDigits,
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(GameError::InvalidMove("10".into()).to_string(), "Invalid move: 10");
        assert_eq!(
            GameError::NoDigits.to_string(),
            "Input must contain at least one digit"
        );
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = GameError::NoDigits.into();
        assert_eq!(err.downcast_ref::<GameError>(), Some(&GameError::NoDigits));
    }
}
