use common::model::Winner;

pub const TURN_PROMPT: &str = "Your turn: click a column.";
pub const RESET_HINT: &str = "  (Press Reset to play again)";
pub const THINKING: &str = "Thinking…";
pub const RESETTING: &str = "Resetting…";
pub const INVALID_MOVE: &str = "Invalid move.";
pub const NETWORK_ERROR: &str = "Network error. Try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    /// Derived from the snapshot's winner.
    #[default]
    Outcome,
    /// A request is in flight.
    Progress,
    /// Something went wrong. Survives the re-sync that follows it.
    Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn outcome(winner: Winner) -> Self {
        Status {
            text: derive_status_text(winner),
            kind: StatusKind::Outcome,
        }
    }

    pub fn progress(text: &str) -> Self {
        Status {
            text: text.to_string(),
            kind: StatusKind::Progress,
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Status {
            text: text.into(),
            kind: StatusKind::Notice,
        }
    }

    pub fn is_notice(&self) -> bool {
        self.kind == StatusKind::Notice
    }
}

pub fn derive_status_text(winner: Winner) -> String {
    let verdict = match winner {
        Winner::None => return TURN_PROMPT.to_string(),
        Winner::Player => "You win! 🎉",
        Winner::Cpu => "CPU wins. 🤖",
        Winner::Draw => "Draw.",
    };
    format!("{verdict}{RESET_HINT}")
}
