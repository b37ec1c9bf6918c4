use crate::domain::state::Score;

/// Largest score magnitude a cell accepts. Keeps totals far from `i64` overflow.
pub const MAX_SCORE_MAGNITUDE: i64 = 1_000_000_000_000;

/// Raw score cell text, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreInput {
    /// Cleared cell; stored as an absent score.
    Empty,
    Value(i64),
    /// Text that is neither empty nor an integer. Edits carrying this are rejected.
    Malformed(String),
}

impl ScoreInput {
    /// Classify cell text. Surrounding whitespace is ignored; any integer within
    /// [`MAX_SCORE_MAGNITUDE`] is accepted, including zero and negatives.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ScoreInput::Empty;
        }
        match trimmed.parse::<i64>() {
            Ok(v) if v.unsigned_abs() <= MAX_SCORE_MAGNITUDE.unsigned_abs() => {
                ScoreInput::Value(v)
            }
            _ => ScoreInput::Malformed(raw.to_string()),
        }
    }

    /// The score to store, or `None` when the input must be rejected.
    pub fn to_score(&self) -> Option<Score> {
        match self {
            ScoreInput::Empty => Some(None),
            ScoreInput::Value(v) => Some(Some(*v)),
            ScoreInput::Malformed(_) => None,
        }
    }
}
