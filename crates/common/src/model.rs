use crate::board::{empty_grid, Grid, COLUMNS};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Player,
    Cpu,
    Draw,
}

/// `null` or a missing field on the wire means the game is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Outcome>", into = "Option<Outcome>")]
pub enum Winner {
    #[default]
    None,
    Player,
    Cpu,
    Draw,
}

impl Winner {
    pub fn is_decided(self) -> bool {
        self != Winner::None
    }
}

impl From<Option<Outcome>> for Winner {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => Winner::None,
            Some(Outcome::Player) => Winner::Player,
            Some(Outcome::Cpu) => Winner::Cpu,
            Some(Outcome::Draw) => Winner::Draw,
        }
    }
}

impl From<Winner> for Option<Outcome> {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::None => None,
            Winner::Player => Some(Outcome::Player),
            Winner::Cpu => Some(Outcome::Cpu),
            Winner::Draw => Some(Outcome::Draw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    #[serde(default)]
    pub valid_moves: Vec<usize>,
    #[serde(default)]
    pub winner: Winner,
}

impl GameSnapshot {
    /// A fresh board with every column playable.
    pub fn new() -> Self {
        GameSnapshot {
            grid: empty_grid(),
            valid_moves: (0..COLUMNS).collect(),
            winner: Winner::None,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub col: usize,
}

/// Body of a rejected move.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
