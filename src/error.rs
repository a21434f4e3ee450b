//! Error type shared by every part of the engine.

/// Everything that can go wrong while validating input, filtering
/// candidates or running a game.
#[derive(Debug, thiserror::Error)]
pub enum WordleError {
    /// A word or pattern did not have exactly [`WORD_LENGTH`](crate::WORD_LENGTH) characters.
    #[error("expected 5 letters, got {0}")]
    InvalidLength(usize),

    /// A word contained something other than an ASCII letter.
    #[error("invalid character {0:?} (only a-z allowed)")]
    InvalidCharacter(char),

    /// A feedback pattern could not be parsed.
    #[error("invalid pattern {0:?} (use g=green, y=yellow, b=black)")]
    InvalidPattern(String),

    /// The guess is well-formed but not in the allowed word list.
    #[error("{0} is not in the word list")]
    NotInWordList(String),

    /// Applying the feedback would leave no candidate words.
    #[error("no word matches {guess} with feedback {pattern}; the feedback is inconsistent")]
    InconsistentFeedback { guess: String, pattern: String },

    /// Nothing left to score.
    #[error("no possible words remain")]
    NoCandidates,

    /// The game has already been won or lost.
    #[error("the game is already over")]
    GameOver,

    /// A dictionary failed validation.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// Configuration was unreadable or out of range.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordleError>;
